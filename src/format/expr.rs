use crate::expr::Expr;

/// Render an expression as infix text.
///
/// Every operator node below the root is parenthesized. That is deliberately
/// heavier than precedence would require: the parser reads operator chains as
/// a flat left fold, so the printed form must carry the full grouping
/// structure to parse back to the same tree. A function argument starts a
/// fresh root context inside the call's own parentheses.
pub fn pretty(expr: &Expr) -> String {
    pp(expr, true)
}

fn pp(expr: &Expr, root: bool) -> String {
    if let Some((op, lhs, rhs)) = expr.as_operator() {
        let body = format!("{} {} {}", pp(lhs, false), op.symbol(), pp(rhs, false));
        return if root { body } else { format!("({body})") };
    }
    if let Some((func, arg)) = expr.as_function() {
        return format!("{}({})", func.name(), pp(arg, true));
    }

    match expr {
        Expr::Variable => "x".to_string(),
        Expr::Constant(value) => value.to_string(),
        Expr::Neg(inner) => format!("-{}", pp(inner, false)),
        _ => unreachable!("operator and function nodes are rendered via their views"),
    }
}
