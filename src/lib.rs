//! # exprdiff
//!
//! `exprdiff` is a Rust library for parsing, evaluating, printing and
//! symbolically differentiating infix mathematical expressions over
//! **real** or **complex** numbers.
//!
//! ## Overview
//! - Parse text such as `x ^ 2 + sin(y)` into an owned expression tree.
//! - Evaluate a tree under variable bindings from a `HashMap`, `BTreeMap`
//!   or [`Variables`] table.
//! - Render a tree back to fully parenthesized text that re-parses to an
//!   equivalent tree.
//! - Differentiate a tree with respect to any variable, producing a new,
//!   unsimplified tree.
//! - Substitute a subtree for every occurrence of a variable.
//!
//! Internally, expressions are first split into lexemes, then parsed by
//! recursive descent into a [`Node`] tree. All other operations are plain
//! recursive walks over that tree.
//!
//! ## Grammar
//! - Binary operators `+ - * / ^`, all left-associative, in increasing precedence
//!   (`^` binds tightest).
//! - Unary minus on a single factor, desugared into `0 - factor`.
//! - The reserved functions `sin`, `cos`, `ln` and `exp`, called with parentheses.
//! - Numeric literals `digits ("." digits)?` and alphabetic identifiers.
//!
//! ## Example
//! ```rust
//! use std::collections::HashMap;
//! use exprdiff::{parse, Node};
//!
//! let node: Node<f64> = parse("x * x + sin(x)").unwrap();
//! assert_eq!(node.to_string(), "((x * x) + sin(x))");
//!
//! let derivative = node.differentiate("x");
//! let bindings = HashMap::from([("x".to_string(), 0.0)]);
//! // 2x + cos(x) at x = 0
//! assert_eq!(derivative.evaluate(&bindings), Ok(1.0));
//! ```
//!
//! ## Example: Complex Numbers
//! ```rust
//! use num_complex::Complex;
//! use exprdiff::{parse, Node, Variables};
//!
//! let node: Node<Complex<f64>> = parse("ln(z)").unwrap();
//! let vars: Variables<Complex<f64>> = Variables::from(&[("z", Complex::new(-1.0, 0.0))]);
//! let value = node.evaluate(&vars).unwrap();
//! assert!((value.im - std::f64::consts::PI).abs() < 1.0e-12);
//! ```
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

mod lexer;
pub mod scalar;
pub mod operators;
pub mod error;
pub mod node;
pub mod parser;
pub mod variable;
mod evaluator;
mod differentiation;
mod display;

mod proptests;

pub use error::{ArityError, EvalError, ParseError};
pub use node::Node;
pub use operators::{Arity, BinaryOperatorKind, FunctionKind, Kind, ParseKindError};
pub use parser::{Parser, TrailingInput};
pub use scalar::Scalar;
pub use variable::{Bindings, Variables};

/// Parses an expression string with the default [`Parser`] settings.
///
/// Input left over after a complete expression is ignored; use
/// [`Parser::trailing_input`] to reject it instead.
///
/// # Example
/// ```rust
/// use exprdiff::{parse, Node, ParseError};
///
/// let node: Node<f64> = parse("2 * (x + 1)").unwrap();
/// assert_eq!(node.to_string(), "(2 * (x + 1))");
///
/// assert_eq!(
///     parse::<f64>("2 * (x + 1"),
///     Err(ParseError::ExpectedCharacter { expected: ')', position: 10 })
/// );
/// ```
pub fn parse<T: Scalar>(text: &str) -> Result<Node<T>, ParseError> {
    Parser::new().parse(text)
}

/// Evaluates `node` under `bindings`. See [`Node::evaluate`].
pub fn evaluate<T, B>(node: &Node<T>, bindings: &B) -> Result<T, EvalError>
where
    T: Scalar,
    B: Bindings<T> + ?Sized,
{
    node.evaluate(bindings)
}

/// Renders `node` as fully parenthesized text.
pub fn to_text<T: Scalar>(node: &Node<T>) -> String {
    node.to_string()
}

/// Differentiates `node` with respect to `var_name`. See [`Node::differentiate`].
pub fn differentiate<T: Scalar>(node: &Node<T>, var_name: &str) -> Node<T> {
    node.differentiate(var_name)
}

/// Replaces every `var_name` in `node` with a copy of `replacement`.
pub fn substitute<T: Scalar>(node: &Node<T>, var_name: &str, replacement: &Node<T>) -> Node<T> {
    node.substitute(var_name, replacement)
}

#[cfg(test)]
mod lib_tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashMap;

    fn bindings(items: &[(&str, f64)]) -> HashMap<String, f64> {
        items.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_parse_and_evaluate_power() {
        let node = parse::<f64>("3 ^ 4").unwrap();
        let result = evaluate(&node, &bindings(&[])).unwrap();
        assert_abs_diff_eq!(result, 81.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_derivative_of_constant() {
        let node = Node::number(5.0);
        assert_eq!(evaluate(&differentiate(&node, "x"), &bindings(&[])), Ok(0.0));
    }

    #[test]
    fn test_power_derivative_text() {
        let node = parse::<f64>("x^y").unwrap();
        assert_eq!(
            to_text(&differentiate(&node, "y")),
            "((x ^ y) * ((1 * ln(x)) + ((y * 0) / x)))"
        );
    }

    #[test]
    fn test_division_by_zero() {
        let node = parse::<f64>("1 / (x - x)").unwrap();
        assert_eq!(evaluate(&node, &bindings(&[("x", 5.0)])), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_unbound_variable() {
        let node = parse::<f64>("x + 1").unwrap();
        assert_eq!(evaluate(&node, &bindings(&[])), Err(EvalError::UnboundVariable("x".into())));
    }

    #[test]
    fn test_reserved_name_alone() {
        assert_eq!(parse::<f64>("sin"), Ok(Node::variable("sin")));
    }

    #[test]
    fn test_substitute_then_evaluate() {
        // x^2 with x := (t + 1)
        let node = parse::<f64>("x ^ 2").unwrap();
        let replacement = parse::<f64>("t + 1").unwrap();
        let substituted = substitute(&node, "x", &replacement);
        assert_eq!(to_text(&substituted), "((t + 1) ^ 2)");
        let value = evaluate(&substituted, &bindings(&[("t", 2.0)])).unwrap();
        assert_abs_diff_eq!(value, 9.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_round_trip_text() {
        let text = "sin(x) * -y ^ 2 / ln(3.5 + z)";
        let node = parse::<f64>(text).unwrap();
        let reparsed = parse::<f64>(&to_text(&node)).unwrap();
        assert_eq!(reparsed, node);
    }
}
