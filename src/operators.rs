//! # operators.rs
//!
//! Node kinds of an expression tree.
//!
//! The five binary operators and the four elementary functions are defined
//! by macros which centralize each variant, its textual form and its numeric
//! application. `Kind` is the flat, eleven-variant view over all node kinds
//! including the two leaves, with `Arity` as a property of the kind.

use crate::error::{ArityError, EvalError};
use crate::scalar::Scalar;

/// Number of children a node of some kind owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arity {
    Leaf,
    Unary,
    Binary,
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Leaf => "leaf",
            Self::Unary => "unary",
            Self::Binary => "binary",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing operator symbols and function names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseKindError {
    /// The symbol or name is not recognized.
    Unknown,
}

#[doc(hidden)]
/// Internal macro to define all binary operators.
///
/// Each entry gives the variant, its symbol in source text and the
/// closure applying it to two evaluated operands.
macro_rules! binary_operator_kinds {
    ($( $name:ident => { symbol: $symbol:expr, apply: $apply:expr } ),+ $(,)?) => {
        /// Represents a binary operator in an expression tree.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum BinaryOperatorKind {
            $( $name ),+
        }

        impl BinaryOperatorKind {
            /// Applies the operator to two evaluated operands.
            pub fn apply<T: Scalar>(&self, l: T, r: T) -> Result<T, EvalError> {
                match self {
                    $( Self::$name => $apply(l, r), )+
                }
            }

            /// Returns the symbol of this operator.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $( Self::$name => $symbol, )+
                }
            }
        }

        impl std::str::FromStr for BinaryOperatorKind {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $symbol => Ok(Self::$name), )+
                    _ => Err(ParseKindError::Unknown),
                }
            }
        }

        impl From<BinaryOperatorKind> for Kind {
            fn from(kind: BinaryOperatorKind) -> Self {
                match kind {
                    $( BinaryOperatorKind::$name => Kind::$name, )+
                }
            }
        }

        impl TryFrom<Kind> for BinaryOperatorKind {
            type Error = ArityError;

            fn try_from(kind: Kind) -> Result<Self, Self::Error> {
                match kind {
                    $( Kind::$name => Ok(Self::$name), )+
                    _ => Err(ArityError::InvalidArity { kind, expected: Arity::Binary }),
                }
            }
        }
    };
}

binary_operator_kinds! {
    Add => { symbol: "+", apply: |l: T, r: T| Ok(l + r) },
    Sub => { symbol: "-", apply: |l: T, r: T| Ok(l - r) },
    Mul => { symbol: "*", apply: |l: T, r: T| Ok(l * r) },
    Div => { symbol: "/", apply: |l: T, r: T| {
        if r.is_zero() {
            Err(EvalError::DivisionByZero)
        } else {
            Ok(l / r)
        }
    } },
    Pow => { symbol: "^", apply: |l: T, r: T| Ok(l.pow(&r)) },
}

#[doc(hidden)]
/// Internal macro to define all elementary functions.
///
/// The variant's lowercase name is the reserved identifier in source text.
macro_rules! function_kinds {
    ($( $name:ident => { name: $text:expr, apply: $apply:expr } ),+ $(,)?) => {
        /// Enumeration of the elementary functions.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum FunctionKind {
            $( $name ),+
        }

        impl FunctionKind {
            /// Applies the function to an evaluated argument.
            pub fn apply<T: Scalar>(&self, x: T) -> Result<T, EvalError> {
                match self {
                    $( Self::$name => $apply(x), )+
                }
            }

            /// Returns the reserved name of this function.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$name => $text, )+
                }
            }
        }

        impl std::str::FromStr for FunctionKind {
            type Err = ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok(Self::$name), )+
                    _ => Err(ParseKindError::Unknown),
                }
            }
        }

        impl From<FunctionKind> for Kind {
            fn from(kind: FunctionKind) -> Self {
                match kind {
                    $( FunctionKind::$name => Kind::$name, )+
                }
            }
        }

        impl TryFrom<Kind> for FunctionKind {
            type Error = ArityError;

            fn try_from(kind: Kind) -> Result<Self, Self::Error> {
                match kind {
                    $( Kind::$name => Ok(Self::$name), )+
                    _ => Err(ArityError::InvalidArity { kind, expected: Arity::Unary }),
                }
            }
        }
    };
}

function_kinds! {
    Sin => { name: "sin", apply: |x: T| Ok(x.sin()) },
    Cos => { name: "cos", apply: |x: T| Ok(x.cos()) },
    Ln  => { name: "ln",  apply: |x: T| {
        if x.is_outside_ln_domain() {
            Err(EvalError::DomainError { function: "ln", argument: x.to_string() })
        } else {
            Ok(x.ln())
        }
    } },
    Exp => { name: "exp", apply: |x: T| Ok(x.exp()) },
}

impl std::fmt::Display for BinaryOperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Flat view over every node kind of an expression tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Number,
    Variable,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sin,
    Cos,
    Ln,
    Exp,
}

impl Kind {
    /// Returns how many children a node of this kind owns.
    pub fn arity(&self) -> Arity {
        match self {
            Self::Number | Self::Variable => Arity::Leaf,
            Self::Sin | Self::Cos | Self::Ln | Self::Exp => Arity::Unary,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow => Arity::Binary,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
