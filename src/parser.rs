//! # parser.rs
//!
//! This module parses expression strings into an expression tree.
//!
//! The grammar is layered from lowest to highest precedence:
//!
//! ```text
//! expression := term (("+" | "-") term)*
//! term       := power (("*" | "/") power)*
//! power      := factor ("^" factor)*
//! factor     := number | identifier-or-call | "(" expression ")" | "-" factor
//! identifier-or-call := ("sin" | "cos" | "ln" | "exp") "(" expression ")" | identifier
//! ```
//!
//! # Notes
//! - Every binary layer folds to the left, `^` included: `2^3^2` is `(2^3)^2`.
//! - Unary minus exists only at `factor` level and is desugared into
//!   `0 - factor`, so `--x` parses as `0 - (0 - x)`.
//! - A reserved function name that is not followed by `(` is an ordinary variable.
//! - By default, input left over after a complete expression is ignored.
//!   `TrailingInput::Reject` turns it into an error.

use std::str::FromStr;

use crate::error::ParseError;
use crate::lexer::{self, Lexeme};
use crate::node::Node;
use crate::operators::{BinaryOperatorKind, FunctionKind};
use crate::scalar::Scalar;

/// What to do with input left over after a complete expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailingInput {
    /// Stop at the first unconsumed lexeme and return what was parsed.
    #[default]
    Ignore,
    /// Fail with `ParseError::UnexpectedCharacter` at the first unconsumed lexeme.
    Reject,
}

/// Configurable expression parser.
///
/// `Parser::default()` accepts exactly what [`crate::parse`] accepts.
///
/// # Examples
/// ```rust
/// use exprdiff::{Parser, ParseError, TrailingInput, Node};
///
/// let lenient = Parser::new();
/// let node: Node<f64> = lenient.parse("1 + 1 garbage").unwrap();
/// assert_eq!(node.to_string(), "(1 + 1)");
///
/// let strict = Parser::new().trailing_input(TrailingInput::Reject);
/// let err = strict.parse::<f64>("1 + 1 garbage").unwrap_err();
/// assert_eq!(err, ParseError::UnexpectedCharacter { found: 'g', position: 6 });
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parser {
    trailing_input: TrailingInput,
    max_depth: Option<usize>,
}

impl Parser {
    /// Creates a parser with the default settings: trailing input is
    /// ignored and nesting depth is unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how input left over after a complete expression is handled.
    pub fn trailing_input(mut self, policy: TrailingInput) -> Self {
        self.trailing_input = policy;
        self
    }

    /// Limits how deeply factors (parentheses, calls, unary minus) may nest.
    ///
    /// Parsing fails with `ParseError::NestingTooDeep` beyond the limit,
    /// which keeps hostile input from exhausting the stack.
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Parses `text` into an expression tree over `T`.
    pub fn parse<T: Scalar>(&self, text: &str) -> Result<Node<T>, ParseError> {
        let lexemes = lexer::from(text);
        log::debug!("parsing {:?} ({} lexemes)", text, lexemes.len());

        let mut descent = Descent {
            lexemes: &lexemes,
            pos: 0,
            end: text.len(),
            depth: 0,
            max_depth: self.max_depth,
        };
        let node = descent.parse_expression()?;

        if let Some(rest) = descent.current() {
            match self.trailing_input {
                TrailingInput::Ignore => {
                    log::debug!("ignoring trailing input from {}", rest);
                },
                TrailingInput::Reject => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: rest.first_char(),
                        position: rest.start(),
                    });
                },
            }
        }

        Ok(node)
    }
}

/// Parses with the default `Parser` settings.
impl<T: Scalar> FromStr for Node<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::new().parse(s)
    }
}

/// Cursor state of one recursive-descent run over a lexeme slice.
struct Descent<'l, 'a> {
    lexemes: &'l [Lexeme<'a>],
    pos: usize,
    end: usize,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'l, 'a> Descent<'l, 'a> {
    // Borrows from the slice rather than from `self`, so the returned
    // lexeme stays usable across `advance`.
    fn current(&self) -> Option<&'l Lexeme<'a>> {
        self.lexemes.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Byte offset of the current lexeme, or the input length at the end.
    fn position(&self) -> usize {
        self.current().map_or(self.end, Lexeme::start)
    }

    /// Returns the current operator if it is one of `accepted`.
    fn peek_operator(&self, accepted: &[BinaryOperatorKind]) -> Option<BinaryOperatorKind> {
        let lexeme = self.current()?;
        BinaryOperatorKind::from_str(lexeme.text())
            .ok()
            .filter(|kind| accepted.contains(kind))
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.current() {
            Some(lexeme) if lexeme.is_char(expected) => {
                self.advance();
                Ok(())
            },
            _ => Err(ParseError::ExpectedCharacter { expected, position: self.position() }),
        }
    }

    /// Parses one left-folding binary layer over `operand`.
    fn parse_layer<T: Scalar>(
        &mut self,
        accepted: &[BinaryOperatorKind],
        operand: fn(&mut Self) -> Result<Node<T>, ParseError>,
    ) -> Result<Node<T>, ParseError> {
        let mut left = operand(self)?;
        while let Some(kind) = self.peek_operator(accepted) {
            self.advance();
            let right = operand(self)?;
            left = Node::binary(kind, left, right);
        }
        Ok(left)
    }

    fn parse_expression<T: Scalar>(&mut self) -> Result<Node<T>, ParseError> {
        self.parse_layer(&[BinaryOperatorKind::Add, BinaryOperatorKind::Sub], Self::parse_term)
    }

    fn parse_term<T: Scalar>(&mut self) -> Result<Node<T>, ParseError> {
        self.parse_layer(&[BinaryOperatorKind::Mul, BinaryOperatorKind::Div], Self::parse_power)
    }

    fn parse_power<T: Scalar>(&mut self) -> Result<Node<T>, ParseError> {
        self.parse_layer(&[BinaryOperatorKind::Pow], Self::parse_factor)
    }

    fn parse_factor<T: Scalar>(&mut self) -> Result<Node<T>, ParseError> {
        self.depth += 1;
        if let Some(limit) = self.max_depth {
            if self.depth > limit {
                return Err(ParseError::NestingTooDeep { limit, position: self.position() });
            }
        }
        let node = self.parse_operand();
        self.depth -= 1;
        node
    }

    fn parse_operand<T: Scalar>(&mut self) -> Result<Node<T>, ParseError> {
        let lexeme = self
            .current()
            .ok_or(ParseError::UnexpectedEndOfInput { position: self.end })?;

        if lexeme.is_char('(') {
            self.advance();
            let inner = self.parse_expression()?;
            self.expect(')')?;
            Ok(inner)
        } else if lexeme.is_number() {
            self.advance();
            T::from_literal(lexeme.text())
                .map(Node::Number)
                .ok_or_else(|| ParseError::InvalidNumberLiteral {
                    literal: lexeme.text().to_string(),
                    position: lexeme.start(),
                })
        } else if lexeme.is_identifier() {
            self.advance();
            self.parse_identifier_or_call(lexeme)
        } else if lexeme.is_char('-') {
            self.advance();
            let operand = self.parse_factor()?;
            Ok(Node::zero().sub(operand))
        } else {
            Err(ParseError::UnexpectedCharacter {
                found: lexeme.first_char(),
                position: lexeme.start(),
            })
        }
    }

    fn parse_identifier_or_call<T: Scalar>(&mut self, ident: &Lexeme<'a>) -> Result<Node<T>, ParseError> {
        let followed_by_paren = self.current().is_some_and(|next| next.is_char('('));
        match FunctionKind::from_str(ident.text()) {
            Ok(kind) if followed_by_paren => {
                self.advance();
                let arg = self.parse_expression()?;
                self.expect(')')?;
                Ok(Node::unary(kind, arg))
            },
            _ => Ok(Node::variable(ident.text())),
        }
    }
}
