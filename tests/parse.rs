use pretty_assertions::assert_eq;
use symcalc::{add, mul, neg, parse_expr, pow, pretty, sub, CalcError, Expr};

fn parsed(input: &str) -> Expr {
    parse_expr(input).expect("parse input")
}

#[test]
fn leaves() {
    assert_eq!(parsed("x"), Expr::Variable);
    assert_eq!(parsed("3"), Expr::Constant(3.0));
    assert_eq!(parsed("3.5"), Expr::Constant(3.5));
}

#[test]
fn operator_chains_fold_left() {
    assert_eq!(
        parsed("x - 1 + 2"),
        add(sub(Expr::Variable, Expr::Constant(1.0)), Expr::Constant(2.0))
    );
    // No precedence beyond parentheses: a flat chain is a plain left fold.
    assert_eq!(
        parsed("x + 1 * 2"),
        mul(add(Expr::Variable, Expr::Constant(1.0)), Expr::Constant(2.0))
    );
}

#[test]
fn leading_unary_minus() {
    assert_eq!(parsed("-x"), neg(Expr::Variable));
    assert_eq!(parsed("-2.5"), neg(Expr::Constant(2.5)));
    assert_eq!(
        parsed("-(x + 1)"),
        neg(add(Expr::Variable, Expr::Constant(1.0)))
    );
    assert_eq!(
        parsed("-x ^ 2"),
        pow(neg(Expr::Variable), Expr::Constant(2.0))
    );
}

#[test]
fn function_calls() {
    assert_eq!(parsed("sin(x)"), Expr::Sin(Expr::Variable.boxed()));
    assert_eq!(
        parsed("log(sin(x))"),
        Expr::Log(Expr::Sin(Expr::Variable.boxed()).boxed())
    );
    assert_eq!(
        parsed("e^(x ^ 2)"),
        Expr::Exp(pow(Expr::Variable, Expr::Constant(2.0)).boxed())
    );
    assert_eq!(
        parsed("sin((x + 1) * x)"),
        Expr::Sin(mul(add(Expr::Variable, Expr::Constant(1.0)), Expr::Variable).boxed())
    );
}

#[test]
fn grouping() {
    assert_eq!(
        parsed("(x + 1) * sin(x)"),
        mul(
            add(Expr::Variable, Expr::Constant(1.0)),
            Expr::Sin(Expr::Variable.boxed())
        )
    );
    assert_eq!(parsed("((x))"), Expr::Variable);
    assert_eq!(
        parsed("(x) + (x)"),
        add(Expr::Variable, Expr::Variable)
    );
}

#[test]
fn whitespace_is_irrelevant() {
    assert_eq!(parsed("  sin( x )+ 1 "), parsed("sin(x) + 1"));
    assert_eq!(parsed("x+1*2"), parsed("x + 1 * 2"));
}

#[test]
fn round_trips() {
    let inputs = [
        "x",
        "3.5",
        "-x",
        "x + 1",
        "(x + 1) * sin(x)",
        "e^(x ^ 2)",
        "-(x + 1)",
        "1 / (x ^ 2)",
        "((x + 1) + 2) ^ 2",
        "sin((x + 1) * x)",
        "e^(x) ^ 2",
    ];
    for input in inputs {
        let tree = parsed(input);
        let rendered = pretty(&tree);
        assert_eq!(parsed(&rendered), tree, "round trip for {input}");
    }
}

#[test]
fn malformed_input_is_rejected() {
    let inputs = [
        "",
        "x +",
        "* x",
        "((x)",
        "sin(x",
        ")x(",
        "x $ 2",
        "y",
        "sin x",
        "(x)(x)",
        "x 2",
        "x * -2",
    ];
    for input in inputs {
        match parse_expr(input) {
            Err(CalcError::Parse(_)) => {}
            other => panic!("expected a parse error for {input:?}, got {other:?}"),
        }
    }
}
