//! # display.rs
//!
//! Rendering of expression trees back to source text.
//!
//! The output is fully parenthesized: every binary node is wrapped as
//! `(left op right)` and every function as `name(arg)`, so parsing the
//! rendered text yields a tree that evaluates identically.
//!
//! # Notes
//! - A negative literal renders as `-1` and re-parses as `(0 - 1)`.
//! - A complex literal with a non-zero imaginary part renders as
//!   `(re + (im * (ln((0 - 1)) / pi)))`, since `ln(0 - 1)` is exactly `pi * i`.
//! - Non-finite literals do not round-trip. They render as `inf`, `-inf`
//!   or `NaN`, which parse back as variables. An overlong digit run such as
//!   a 400-digit integer parses to `inf` for `f64` and hits the same limit.

use std::fmt;

use crate::node::Node;
use crate::scalar::Scalar;

impl<T: Scalar> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => value.fmt_literal(f),
            Self::Variable(name) => f.write_str(name),
            Self::BinaryOperator { kind, left, right } => {
                write!(f, "({} {} {})", left, kind.symbol(), right)
            },
            Self::FunctionCall { kind, arg } => write!(f, "{}({})", kind.name(), arg),
        }
    }
}
