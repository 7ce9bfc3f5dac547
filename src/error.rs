//! # error.rs
//!
//! Error types returned by parsing, evaluation and kind conversion.
//!
//! Positions are 0-indexed byte offsets into the parsed source text.

use thiserror::Error;

use crate::operators::{Arity, Kind};

/// Errors that can occur while parsing source text into an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended where an operand was required.
    #[error("unexpected end of input at position {position}")]
    UnexpectedEndOfInput { position: usize },

    /// A character that cannot start an operand, or trailing input when
    /// trailing input is rejected.
    #[error("unexpected character '{found}' at position {position}")]
    UnexpectedCharacter { found: char, position: usize },

    /// A specific character, such as a closing parenthesis, was required.
    #[error("expected '{expected}' at position {position}")]
    ExpectedCharacter { expected: char, position: usize },

    /// A run of digits and dots that the numeric type cannot convert.
    #[error("invalid number literal '{literal}' at position {position}")]
    InvalidNumberLiteral { literal: String, position: usize },

    /// The input nests deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Returns the byte offset at which parsing failed.
    pub fn position(&self) -> usize {
        match self {
            Self::UnexpectedEndOfInput { position }
            | Self::UnexpectedCharacter { position, .. }
            | Self::ExpectedCharacter { position, .. }
            | Self::InvalidNumberLiteral { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// Errors that can occur while evaluating an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable '{0}' is not bound")]
    UnboundVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    /// A function was applied outside its domain, e.g. `ln` of a
    /// non-positive real.
    #[error("{function} is undefined for argument {argument}")]
    DomainError { function: &'static str, argument: String },
}

/// Error raised when a kind is used where a different arity is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("{kind} is not a {expected} kind")]
    InvalidArity { kind: Kind, expected: Arity },
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::ExpectedCharacter { expected: ')', position: 4 };
        assert_eq!(err.to_string(), "expected ')' at position 4");
        assert_eq!(err.position(), 4);

        let err = ParseError::InvalidNumberLiteral { literal: "1.2.3".into(), position: 0 };
        assert_eq!(err.to_string(), "invalid number literal '1.2.3' at position 0");
    }

    #[test]
    fn test_eval_error_display() {
        assert_eq!(EvalError::UnboundVariable("x".into()).to_string(), "variable 'x' is not bound");
        assert_eq!(EvalError::DivisionByZero.to_string(), "division by zero");
        let err = EvalError::DomainError { function: "ln", argument: "-1".into() };
        assert_eq!(err.to_string(), "ln is undefined for argument -1");
    }

    #[test]
    fn test_arity_error_display() {
        let err = ArityError::InvalidArity { kind: Kind::Sin, expected: Arity::Binary };
        assert_eq!(err.to_string(), "Sin is not a binary kind");
    }
}
