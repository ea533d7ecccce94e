//! Symbolic differentiation with respect to the free variable.

mod differentiate;

pub use differentiate::differentiate;
