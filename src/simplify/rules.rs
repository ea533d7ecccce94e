use num_traits::Zero;

use crate::expr::{add, div, mul, one, sub, zero, Expr};

/// Reduce an expression to its canonical form by applying local rewrite
/// rules until none fires. Constant folding runs ahead of the structural
/// rules; a node with no matching rule is returned as-is, which is what
/// stops the recursion. Unary-function arguments are left untouched.
///
/// Termination rests on the rule table itself: every rule either strictly
/// shrinks the tree or reorders it under a guard that keeps reorderings from
/// feeding each other. Rules added here must preserve that.
pub fn simplify(expr: &Expr) -> Expr {
    if let Some(reduced) = reduce(expr) {
        return reduced;
    }

    // Generic operator fallback: simplify both children, and re-examine the
    // rebuilt node in case a child's reduction exposed a new top-level rule.
    if let Some((op, lhs, rhs)) = expr.as_operator() {
        let left = simplify(lhs);
        let right = simplify(rhs);
        if left != *lhs || right != *rhs {
            return simplify(&op.apply(left, right));
        }
        return op.apply(left, right);
    }

    expr.clone()
}

fn reduce(expr: &Expr) -> Option<Expr> {
    if let Some((op, lhs, rhs)) = expr.as_operator() {
        if let (Expr::Constant(a), Expr::Constant(b)) = (lhs, rhs) {
            return Some(Expr::Constant(op.eval(*a, *b)));
        }
    }

    match expr {
        Expr::Neg(inner) => match inner.as_ref() {
            Expr::Constant(v) if v.is_zero() => Some(zero()),
            Expr::Neg(e) => Some(simplify(e)),
            _ => None,
        },
        Expr::Add(a, b) => reduce_add(a, b),
        Expr::Sub(a, b) => reduce_sub(a, b),
        Expr::Mul(a, b) => reduce_mul(a, b),
        Expr::Div(a, b) => reduce_div(a, b),
        Expr::Pow(a, b) => reduce_pow(a, b),
        _ => None,
    }
}

fn reduce_add(a: &Expr, b: &Expr) -> Option<Expr> {
    if b.is_zero() {
        return Some(simplify(a));
    }
    if a.is_zero() {
        return Some(simplify(b));
    }
    // Constants gather on the right of a sum.
    if matches!(a, Expr::Constant(_)) {
        return Some(simplify(&add(b.clone(), a.clone())));
    }
    if a == b {
        return Some(simplify(&mul(Expr::Constant(2.0), a.clone())));
    }
    if let Expr::Neg(e) = b {
        return Some(simplify(&sub(a.clone(), e.as_ref().clone())));
    }
    if let Expr::Neg(e) = a {
        return Some(simplify(&sub(b.clone(), e.as_ref().clone())));
    }
    None
}

fn reduce_sub(a: &Expr, b: &Expr) -> Option<Expr> {
    if b.is_zero() {
        return Some(simplify(a));
    }
    if a.is_zero() {
        return Some(simplify_neg(simplify(b)));
    }
    None
}

fn reduce_mul(a: &Expr, b: &Expr) -> Option<Expr> {
    if a.is_one() {
        return Some(simplify(b));
    }
    if b.is_one() {
        return Some(simplify(a));
    }
    if a.is_zero() || b.is_zero() {
        return Some(zero());
    }
    // Constants gather on the left of a product.
    if matches!(b, Expr::Constant(_)) {
        return Some(simplify(&mul(b.clone(), a.clone())));
    }
    // Pull a division's constant numerator out of the product.
    if let Expr::Div(n, d) = a {
        if matches!(n.as_ref(), Expr::Constant(_)) {
            let regrouped = mul(n.as_ref().clone(), div(b.clone(), d.as_ref().clone()));
            return Some(simplify(&regrouped));
        }
    }
    if let Expr::Div(n, d) = b {
        // A constant left operand stays put, or this would swap with the
        // mirror rule above without end.
        if matches!(n.as_ref(), Expr::Constant(_)) && !matches!(a, Expr::Constant(_)) {
            let regrouped = mul(n.as_ref().clone(), div(a.clone(), d.as_ref().clone()));
            return Some(simplify(&regrouped));
        }
    }
    if let Expr::Neg(e) = a {
        return Some(simplify_neg(simplify(&mul(e.as_ref().clone(), b.clone()))));
    }
    if let Expr::Neg(e) = b {
        return Some(simplify_neg(simplify(&mul(a.clone(), e.as_ref().clone()))));
    }
    None
}

fn reduce_div(a: &Expr, b: &Expr) -> Option<Expr> {
    if a.is_zero() {
        return Some(zero());
    }
    if b.is_one() {
        return Some(simplify(a));
    }
    if let Expr::Neg(e) = a {
        return Some(simplify_neg(simplify(&div(e.as_ref().clone(), b.clone()))));
    }
    if let Expr::Neg(e) = b {
        return Some(simplify_neg(simplify(&div(a.clone(), e.as_ref().clone()))));
    }
    None
}

fn reduce_pow(a: &Expr, b: &Expr) -> Option<Expr> {
    if a.is_zero() {
        return Some(zero());
    }
    if a.is_one() {
        return Some(one());
    }
    if b.is_zero() {
        return Some(one());
    }
    if b.is_one() {
        return Some(simplify(a));
    }
    None
}

/// Negate an already-simplified expression without introducing a reducible
/// `Neg` node.
fn simplify_neg(expr: Expr) -> Expr {
    match expr {
        Expr::Constant(v) if v.is_zero() => zero(),
        Expr::Neg(inner) => *inner,
        other => Expr::Neg(other.boxed()),
    }
}
