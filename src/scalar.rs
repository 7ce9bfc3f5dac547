//! # scalar.rs
//!
//! Numeric backend for expression trees.
//!
//! This module defines the `Scalar` trait which abstracts the operations an
//! expression tree needs from its numeric domain, so the same tree logic can
//! run over real numbers (`f32`, `f64`) or complex numbers
//! (`num_complex::Complex<f32>`, `num_complex::Complex<f64>`).

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use num_complex::{Complex, ComplexFloat};
use num_traits::float::{Float, FloatConst};
use num_traits::Zero;

/// Trait for the numeric type carried by an expression tree.
///
/// Provides the operator set required by evaluation and differentiation:
/// arithmetic through the `std::ops` bounds, plus power, the elementary
/// functions, zero tests and literal conversion.
pub trait Scalar:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Converts a numeric literal (`digits ("." digits)?`) into a value.
    ///
    /// Returns `None` if the text is not a valid literal, e.g. `1.2.3`.
    fn from_literal(text: &str) -> Option<Self>;

    fn pow(&self, rhs: &Self) -> Self;
    fn sin(&self) -> Self;
    fn cos(&self) -> Self;
    fn ln(&self) -> Self;
    fn exp(&self) -> Self;

    /// Returns true if the value equals the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if the natural logarithm is undefined at this value.
    ///
    /// Ordered types reject every non-positive value, complex types only
    /// reject exact zero.
    fn is_outside_ln_domain(&self) -> bool;

    /// Writes the value as it appears in rendered expressions.
    ///
    /// The text must parse back to an expression with the same value.
    /// Non-finite values (`inf`, `NaN`) are the exception.
    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_real_scalar {
    ($($float:ty),+ $(,)?) => {
        $(
            /// Implementation of `Scalar` for a primitive real type.
            impl Scalar for $float {
                fn zero() -> Self { 0.0 }
                fn one() -> Self { 1.0 }

                fn from_literal(text: &str) -> Option<Self> { text.parse().ok() }

                fn pow(&self, rhs: &Self) -> Self { <$float>::powf(*self, *rhs) }
                fn sin(&self) -> Self { <$float>::sin(*self) }
                fn cos(&self) -> Self { <$float>::cos(*self) }
                fn ln(&self) -> Self { <$float>::ln(*self) }
                fn exp(&self) -> Self { <$float>::exp(*self) }

                fn is_zero(&self) -> bool { *self == 0.0 }
                fn is_outside_ln_domain(&self) -> bool { *self <= 0.0 }
            }
        )+
    };
}

impl_real_scalar!(f32, f64);

/// Implementation of `Scalar` for `num_complex::Complex`.
impl<F> Scalar for Complex<F>
where
    F: Float + FloatConst + FromStr + fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    fn zero() -> Self { <Complex<F> as Zero>::zero() }
    fn one() -> Self { <Complex<F> as num_traits::One>::one() }

    fn from_literal(text: &str) -> Option<Self> {
        text.parse::<F>().ok().map(Complex::from)
    }

    fn pow(&self, rhs: &Self) -> Self { ComplexFloat::powc(*self, *rhs) }
    fn sin(&self) -> Self { ComplexFloat::sin(*self) }
    fn cos(&self) -> Self { ComplexFloat::cos(*self) }
    fn ln(&self) -> Self { ComplexFloat::ln(*self) }
    fn exp(&self) -> Self { ComplexFloat::exp(*self) }

    fn is_zero(&self) -> bool { <Complex<F> as Zero>::is_zero(self) }
    fn is_outside_ln_domain(&self) -> bool { <Complex<F> as Zero>::is_zero(self) }

    fn fmt_literal(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if Zero::is_zero(&self.im) {
            return fmt::Display::fmt(&self.re, f);
        }
        // the grammar has no imaginary unit; ln(0 - 1) is exactly pi*i
        write!(f, "({} + ({} * (ln((0 - 1)) / {})))", self.re, self.im, F::PI())
    }
}
