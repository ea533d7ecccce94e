//! Symbolic differentiation for expressions in a single variable: parse
//! infix text into a tree, differentiate it, reduce the result to canonical
//! form, and render it back to text.

pub mod calculus;
pub mod error;
pub mod expr;
pub mod format;
pub mod parser;
pub mod simplify;

pub use calculus::differentiate;
pub use error::{CalcError, Result};
pub use expr::{add, div, mul, neg, one, pow, sub, zero, BinOp, Expr, UnaryFn};
pub use format::pretty;
pub use parser::parse_expr;
pub use simplify::simplify;
