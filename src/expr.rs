//! Expression tree definitions and helpers.

use std::fmt;

use num_traits::{One, Zero};

#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Variable,
    Constant(f64),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Neg(Box<Expr>),
    Exp(Box<Expr>),
    Log(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
}

/// Binary-operator view tag. Carrying the tag instead of the node lets rules
/// rebuild a node of the same kind from fresh operands.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        match self {
            BinOp::Add => Expr::Add(lhs.boxed(), rhs.boxed()),
            BinOp::Sub => Expr::Sub(lhs.boxed(), rhs.boxed()),
            BinOp::Mul => Expr::Mul(lhs.boxed(), rhs.boxed()),
            BinOp::Div => Expr::Div(lhs.boxed(), rhs.boxed()),
            BinOp::Pow => Expr::Pow(lhs.boxed(), rhs.boxed()),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    /// Evaluate the operator on two constants, with ordinary IEEE semantics.
    pub fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
            BinOp::Pow => lhs.powf(rhs),
        }
    }
}

/// Unary-function view tag.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnaryFn {
    Exp,
    Log,
    Sin,
    Cos,
}

impl UnaryFn {
    pub fn apply(self, arg: Expr) -> Expr {
        match self {
            UnaryFn::Exp => Expr::Exp(arg.boxed()),
            UnaryFn::Log => Expr::Log(arg.boxed()),
            UnaryFn::Sin => Expr::Sin(arg.boxed()),
            UnaryFn::Cos => Expr::Cos(arg.boxed()),
        }
    }

    /// Surface spelling, shared by the formatter and the tokenizer. The
    /// exponential is written `e^(…)`, so its name is the `e^` prefix.
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Exp => "e^",
            UnaryFn::Log => "log",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
        }
    }
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(value)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Expr::Constant(v) if v.is_zero())
    }

    pub fn is_one(&self) -> bool {
        matches!(self, Expr::Constant(v) if v.is_one())
    }

    /// Decompose a binary-operator node into its tag and operands.
    pub fn as_operator(&self) -> Option<(BinOp, &Expr, &Expr)> {
        match self {
            Expr::Add(a, b) => Some((BinOp::Add, a, b)),
            Expr::Sub(a, b) => Some((BinOp::Sub, a, b)),
            Expr::Mul(a, b) => Some((BinOp::Mul, a, b)),
            Expr::Div(a, b) => Some((BinOp::Div, a, b)),
            Expr::Pow(a, b) => Some((BinOp::Pow, a, b)),
            _ => None,
        }
    }

    /// Decompose a unary-function node into its tag and argument.
    pub fn as_function(&self) -> Option<(UnaryFn, &Expr)> {
        match self {
            Expr::Exp(a) => Some((UnaryFn::Exp, a)),
            Expr::Log(a) => Some((UnaryFn::Log, a)),
            Expr::Sin(a) => Some((UnaryFn::Sin, a)),
            Expr::Cos(a) => Some((UnaryFn::Cos, a)),
            _ => None,
        }
    }

    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::pretty(self))
    }
}

pub fn zero() -> Expr {
    Expr::Constant(0.0)
}

pub fn one() -> Expr {
    Expr::Constant(1.0)
}

pub fn pow(base: Expr, exp: Expr) -> Expr {
    Expr::Pow(base.boxed(), exp.boxed())
}

pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(a.boxed(), b.boxed())
}

pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(a.boxed(), b.boxed())
}

pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(a.boxed(), b.boxed())
}

pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Div(a.boxed(), b.boxed())
}

pub fn neg(a: Expr) -> Expr {
    Expr::Neg(a.boxed())
}
