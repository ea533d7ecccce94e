use crate::error::{CalcError, Result};
use crate::expr::{add, div, mul, one, pow, sub, zero, Expr, UnaryFn};
use crate::format::pretty;

/// Differentiate `expr` with respect to the free variable, returning the raw
/// derivative tree. Simplification is a separate pass.
pub fn differentiate(expr: &Expr) -> Result<Expr> {
    match expr {
        Expr::Variable => Ok(one()),
        Expr::Constant(_) => Ok(zero()),

        Expr::Neg(inner) => Ok(Expr::Neg(differentiate(inner)?.boxed())),
        Expr::Add(f, g) => Ok(add(differentiate(f)?, differentiate(g)?)),
        Expr::Sub(f, g) => Ok(sub(differentiate(f)?, differentiate(g)?)),
        Expr::Mul(f, g) => product_rule(f, g),
        Expr::Pow(base, exp) => power_rule(expr, base, exp),

        // Reciprocal rule, ahead of the function cases so 1/f never reaches
        // the generic fallback.
        Expr::Div(num, den) if num.is_one() => Ok(div(
            differentiate(den)?,
            pow(den.as_ref().clone(), Expr::Constant(2.0)),
        )),

        // Direct identities when the argument is the bare variable.
        Expr::Exp(arg) if matches!(**arg, Expr::Variable) => Ok(expr.clone()),
        Expr::Log(arg) if matches!(**arg, Expr::Variable) => Ok(div(one(), Expr::Variable)),
        Expr::Sin(arg) if matches!(**arg, Expr::Variable) => Ok(Expr::Cos(arg.clone())),
        Expr::Cos(arg) if matches!(**arg, Expr::Variable) => {
            Ok(Expr::Neg(Expr::Sin(arg.clone()).boxed()))
        }

        _ => match expr.as_function() {
            Some((func, arg)) => chain_rule(func, arg),
            None => Err(CalcError::Unsupported(pretty(expr))),
        },
    }
}

fn product_rule(f: &Expr, g: &Expr) -> Result<Expr> {
    let df = differentiate(f)?;
    let dg = differentiate(g)?;
    Ok(add(mul(df, g.clone()), mul(f.clone(), dg)))
}

fn power_rule(whole: &Expr, base: &Expr, exp: &Expr) -> Result<Expr> {
    match (base, exp) {
        // d(f^n) = n * f^(n-1). The exponent arithmetic stays in f64.
        (_, Expr::Constant(n)) => Ok(mul(
            Expr::Constant(*n),
            pow(base.clone(), Expr::Constant(n - 1.0)),
        )),
        // d(n^g) = log(n) * n^g * g'
        (Expr::Constant(n), _) => Ok(mul(
            mul(
                Expr::Log(Expr::Constant(*n).boxed()),
                pow(Expr::Constant(*n), exp.clone()),
            ),
            differentiate(exp)?,
        )),
        _ => Err(CalcError::Unsupported(pretty(whole))),
    }
}

/// Generalized chain rule for `g(f)` with a compound argument: differentiate
/// `g` applied to the bare variable, then multiply by `f'`. A function-shaped
/// outer derivative has the argument substituted into its shell; an
/// operator-shaped one is reused as-is, which is sound for the built-in
/// functions because each derivative template uses its single slot once.
fn chain_rule(func: UnaryFn, arg: &Expr) -> Result<Expr> {
    let outer = differentiate(&func.apply(Expr::Variable))?;
    let inner = differentiate(arg)?;

    if let Some((shell, _)) = outer.as_function() {
        return Ok(mul(shell.apply(arg.clone()), inner));
    }
    if let Some((op, lhs, rhs)) = outer.as_operator() {
        return Ok(mul(op.apply(lhs.clone(), rhs.clone()), inner));
    }
    Err(CalcError::Composition(pretty(&outer)))
}
