//! Canonical simplification of expression trees.

mod rules;

pub use rules::simplify;
