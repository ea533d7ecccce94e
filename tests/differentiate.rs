use pretty_assertions::assert_eq;
use symcalc::{differentiate, parse_expr, pretty, simplify, CalcError, Expr};

fn derive(input: &str) -> Expr {
    let expr = parse_expr(input).expect("parse input");
    simplify(&differentiate(&expr).expect("differentiate"))
}

fn assert_diff_eq(input: &str, expected: &str) {
    let got = derive(input);
    let expected_expr = simplify(&parse_expr(expected).expect("parse expected"));
    assert_eq!(got, expected_expr, "d/dx {input}");
}

#[test]
fn variables_and_constants() {
    assert_diff_eq("x", "1");
    assert_diff_eq("5", "0");
    assert_diff_eq("3.25", "0");
}

#[test]
fn sums_and_differences() {
    assert_diff_eq("x + 5", "1");
    assert_diff_eq("x - 5", "1");
    assert_diff_eq("-x", "-1");
}

#[test]
fn product_rule() {
    assert_diff_eq("x * x", "2 * x");
    assert_diff_eq("sin(x) * x", "(cos(x) * x) + sin(x)");
}

#[test]
fn power_rule() {
    assert_diff_eq("x ^ 3", "3 * (x ^ 2)");
    assert_diff_eq("x ^ 1", "1");
}

#[test]
fn constant_base_power() {
    assert_diff_eq("2 ^ x", "log(2) * (2 ^ x)");
}

#[test]
fn function_identities() {
    assert_diff_eq("sin(x)", "cos(x)");
    assert_diff_eq("cos(x)", "-sin(x)");
    assert_diff_eq("e^(x)", "e^(x)");
    assert_diff_eq("log(x)", "1 / x");
}

#[test]
fn reciprocal_rule() {
    assert_diff_eq("1 / x", "1 / (x ^ 2)");
    assert_diff_eq("1 / sin(x)", "cos(x) / (sin(x) ^ 2)");
}

#[test]
fn chain_rule_composites() {
    assert_diff_eq("e^(x ^ 2)", "e^(x ^ 2) * (2 * x)");
    assert_diff_eq("sin(x ^ 2)", "cos(x ^ 2) * (2 * x)");
    assert_diff_eq("e^(sin(x))", "e^(sin(x)) * cos(x)");
    assert_diff_eq("sin(sin(x ^ 2))", "cos(sin(x ^ 2)) * (cos(x ^ 2) * (2 * x))");
}

#[test]
fn log_composite_reuses_reciprocal_template() {
    // The outer derivative of log is the 1/x template; its operands are kept
    // as-is and only the inner derivative multiplies on.
    assert_diff_eq("log(x ^ 2)", "(2 * x) / x");
}

#[test]
fn cos_composite_is_rejected() {
    let expr = parse_expr("cos(x ^ 2)").expect("parse input");
    match differentiate(&expr) {
        Err(CalcError::Composition(_)) => {}
        other => panic!("expected a composition error, got {other:?}"),
    }
}

#[test]
fn unsupported_shapes_are_rejected() {
    for input in ["x ^ x", "x / sin(x)", "sin(x) / x"] {
        let expr = parse_expr(input).expect("parse input");
        match differentiate(&expr) {
            Err(CalcError::Unsupported(_)) => {}
            other => panic!("expected an unsupported error for {input}, got {other:?}"),
        }
    }
}

#[test]
fn end_to_end_surface_form() {
    let expr = parse_expr("sin(x) * x").expect("parse input");
    let derivative = simplify(&differentiate(&expr).expect("differentiate"));
    let rendered = pretty(&derivative);
    assert_eq!(rendered, "(cos(x) * x) + sin(x)");

    // The printed derivative parses back to the same tree.
    let reparsed = parse_expr(&rendered).expect("reparse rendered derivative");
    assert_eq!(reparsed, derivative);
}
