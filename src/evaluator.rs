//! # evaluator.rs
//!
//! Numeric evaluation of an expression tree under a set of variable bindings.

use crate::error::EvalError;
use crate::node::Node;
use crate::scalar::Scalar;
use crate::variable::Bindings;

impl<T: Scalar> Node<T> {
    /// Computes the value of the tree, looking free variables up in `bindings`.
    ///
    /// # Errors
    /// - `EvalError::UnboundVariable` if a variable has no binding.
    /// - `EvalError::DivisionByZero` if a divisor evaluates to zero.
    /// - `EvalError::DomainError` if `ln` is applied outside its domain.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use exprdiff::{parse, Node};
    ///
    /// let node: Node<f64> = parse("x ^ 2 + 1").unwrap();
    /// let bindings = HashMap::from([("x".to_string(), 3.0)]);
    /// assert_eq!(node.evaluate(&bindings), Ok(10.0));
    /// ```
    pub fn evaluate<B>(&self, bindings: &B) -> Result<T, EvalError>
    where
        B: Bindings<T> + ?Sized,
    {
        let result = self.eval_node(bindings);
        if let Err(err) = &result {
            log::debug!("evaluation of {} failed: {}", self, err);
        }
        result
    }

    fn eval_node<B>(&self, bindings: &B) -> Result<T, EvalError>
    where
        B: Bindings<T> + ?Sized,
    {
        match self {
            Self::Number(value) => Ok(value.clone()),
            Self::Variable(name) => bindings
                .lookup(name)
                .cloned()
                .ok_or_else(|| EvalError::UnboundVariable(name.clone())),
            Self::BinaryOperator { kind, left, right } => {
                let l = left.eval_node(bindings)?;
                let r = right.eval_node(bindings)?;
                kind.apply(l, r)
            },
            Self::FunctionCall { kind, arg } => {
                let x = arg.eval_node(bindings)?;
                kind.apply(x)
            },
        }
    }
}

#[cfg(test)]
mod evaluator_tests {
    use super::*;
    use crate::parser::Parser;
    use crate::variable::Variables;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex;
    use std::collections::{BTreeMap, HashMap};

    fn eval_with(text: &str, vars: &[(&str, f64)]) -> Result<f64, EvalError> {
        let node: Node<f64> = Parser::new().parse(text).unwrap();
        node.evaluate(&Variables::<f64>::from(vars))
    }

    #[test]
    fn test_literals_and_arithmetic() {
        assert_eq!(eval_with("42", &[]), Ok(42.0));
        assert_eq!(eval_with("2 + 3 * 4", &[]), Ok(14.0));
        assert_eq!(eval_with("(2 + 3) * 4", &[]), Ok(20.0));
        assert_eq!(eval_with("10 - 4 - 3", &[]), Ok(3.0));
        assert_eq!(eval_with("8 / 4 / 2", &[]), Ok(1.0));
        assert_eq!(eval_with("-5 + 2", &[]), Ok(-3.0));
    }

    #[test]
    fn test_power() {
        assert_abs_diff_eq!(eval_with("3 ^ 4", &[]).unwrap(), 81.0, epsilon = 1.0e-12);
        // left-associative: (2^3)^2
        assert_abs_diff_eq!(eval_with("2 ^ 3 ^ 2", &[]).unwrap(), 64.0, epsilon = 1.0e-12);
        assert!(eval_with("(0 - 8) ^ 0.5", &[]).unwrap().is_nan());
    }

    #[test]
    fn test_functions() {
        let x = 0.7_f64;
        let vars = [("x", x)];
        assert_abs_diff_eq!(eval_with("sin(x)", &vars).unwrap(), x.sin(), epsilon = 1.0e-12);
        assert_abs_diff_eq!(eval_with("cos(x)", &vars).unwrap(), x.cos(), epsilon = 1.0e-12);
        assert_abs_diff_eq!(eval_with("exp(x)", &vars).unwrap(), x.exp(), epsilon = 1.0e-12);
        assert_abs_diff_eq!(eval_with("ln(x)", &vars).unwrap(), x.ln(), epsilon = 1.0e-12);
        assert_abs_diff_eq!(eval_with("ln(exp(x))", &vars).unwrap(), x, epsilon = 1.0e-12);
    }

    #[test]
    fn test_variables() {
        let vars = [("a", 2.0), ("b", -4.0), ("x", 1.5)];
        assert_abs_diff_eq!(eval_with("a * x + b", &vars).unwrap(), -1.0, epsilon = 1.0e-12);
    }

    #[test]
    fn test_unbound_variable() {
        assert_eq!(eval_with("x + 1", &[]), Err(EvalError::UnboundVariable("x".into())));
        // the first unbound variable in evaluation order is reported
        assert_eq!(eval_with("a * b", &[("b", 1.0)]), Err(EvalError::UnboundVariable("a".into())));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval_with("1 / (x - x)", &[("x", 5.0)]), Err(EvalError::DivisionByZero));
        assert_eq!(eval_with("0 / 0", &[]), Err(EvalError::DivisionByZero));
        assert_eq!(eval_with("1 / 4", &[]), Ok(0.25));
    }

    #[test]
    fn test_ln_domain() {
        assert!(matches!(
            eval_with("ln(x)", &[("x", 0.0)]),
            Err(EvalError::DomainError { function: "ln", .. })
        ));
        assert!(matches!(
            eval_with("ln(0 - 1)", &[]),
            Err(EvalError::DomainError { function: "ln", .. })
        ));
    }

    #[test]
    fn test_errors_propagate_through_functions() {
        assert_eq!(eval_with("sin(1 / 0)", &[]), Err(EvalError::DivisionByZero));
        assert_eq!(eval_with("exp(y) * 2", &[]), Err(EvalError::UnboundVariable("y".into())));
    }

    #[test]
    fn test_map_bindings() {
        let node: Node<f64> = Parser::new().parse("x * y").unwrap();

        let hash = HashMap::from([("x".to_string(), 2.0), ("y".to_string(), 3.0)]);
        assert_eq!(node.evaluate(&hash), Ok(6.0));

        let tree = BTreeMap::from([("x".to_string(), 4.0), ("y".to_string(), 0.5)]);
        assert_eq!(node.evaluate(&tree), Ok(2.0));

        let dynamic: &dyn Bindings<f64> = &hash;
        assert_eq!(node.evaluate(dynamic), Ok(6.0));
    }

    #[test]
    fn test_complex_evaluation() {
        let node: Node<Complex<f64>> = Parser::new().parse("sin(z) + a * cos(z)").unwrap();
        let z = Complex::new(1.0, 2.0);
        let a = Complex::new(3.0, 2.0);
        let vars: Variables<Complex<f64>> = Variables::from(&[("z", z), ("a", a)]);

        let result = node.evaluate(&vars).unwrap();
        let expected = z.sin() + a * z.cos();
        assert_abs_diff_eq!(result.re, expected.re, epsilon = 1.0e-12);
        assert_abs_diff_eq!(result.im, expected.im, epsilon = 1.0e-12);
    }

    #[test]
    fn test_complex_ln_of_negative() {
        let node: Node<Complex<f64>> = Parser::new().parse("ln(0 - 1)").unwrap();
        let result = node.evaluate(&Variables::new()).unwrap();
        assert_abs_diff_eq!(result.re, 0.0, epsilon = 1.0e-12);
        assert_abs_diff_eq!(result.im, std::f64::consts::PI, epsilon = 1.0e-12);

        let node: Node<Complex<f64>> = Parser::new().parse("ln(z - z)").unwrap();
        let vars: Variables<Complex<f64>> = Variables::from(&[("z", Complex::new(1.0, 1.0))]);
        assert!(matches!(node.evaluate(&vars), Err(EvalError::DomainError { .. })));
    }

    #[test]
    fn test_complex_division_by_zero() {
        let node: Node<Complex<f64>> = Parser::new().parse("1 / (z - z)").unwrap();
        let vars: Variables<Complex<f64>> = Variables::from(&[("z", Complex::new(2.0, -1.0))]);
        assert_eq!(node.evaluate(&vars), Err(EvalError::DivisionByZero));
    }
}
