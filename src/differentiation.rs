//! # differentiation.rs
//!
//! Symbolic differentiation of expression trees.
//!
//! Derivatives are built with the textbook rules and are not simplified:
//! `d/dx (x * 2)` is `((1 * 2) + (x * 0))`. Every subtree of the input that
//! appears in the result is a fresh copy, so the result never shares
//! structure with the input.

use crate::node::Node;
use crate::operators::{BinaryOperatorKind, FunctionKind};
use crate::scalar::Scalar;

impl<T: Scalar> Node<T> {
    /// Returns the partial derivative of the tree with respect to `var_name`.
    ///
    /// Variables other than `var_name` are treated as constants.
    ///
    /// # Examples
    /// ```rust
    /// use exprdiff::{parse, Node};
    ///
    /// let node: Node<f64> = parse("x ^ y").unwrap();
    /// assert_eq!(
    ///     node.differentiate("y").to_string(),
    ///     "((x ^ y) * ((1 * ln(x)) + ((y * 0) / x)))"
    /// );
    /// ```
    pub fn differentiate(&self, var_name: &str) -> Self {
        log::trace!("differentiating {} by {}", self, var_name);
        self.derive(var_name)
    }

    /// Applies `differentiate` `order` times. Order zero returns a copy.
    pub fn nth_derivative(&self, var_name: &str, order: usize) -> Self {
        (0..order).fold(self.clone(), |node, _| node.differentiate(var_name))
    }

    fn derive(&self, var_name: &str) -> Self {
        match self {
            Self::Number(_) => Self::zero(),
            Self::Variable(name) => {
                if name == var_name {
                    Self::one()
                } else {
                    Self::zero()
                }
            },
            Self::BinaryOperator { kind, left, right } => {
                let l = left.as_ref().clone();
                let r = right.as_ref().clone();
                let dl = left.derive(var_name);
                let dr = right.derive(var_name);
                match kind {
                    BinaryOperatorKind::Add => dl.add(dr),
                    BinaryOperatorKind::Sub => dl.sub(dr),
                    // d(l*r) = dl*r + l*dr
                    BinaryOperatorKind::Mul => dl.mul(r).add(l.mul(dr)),
                    // d(l/r) = (dl*r - l*dr) / r^2
                    BinaryOperatorKind::Div => {
                        let numerator = dl.mul(r.clone()).sub(l.mul(dr));
                        numerator.div(r.pow(Self::number(T::two())))
                    },
                    // d(l^r) = l^r * (dr*ln(l) + r*dl/l)
                    BinaryOperatorKind::Pow => {
                        let log_term = dr.mul(l.clone().ln());
                        let base_term = r.clone().mul(dl).div(l.clone());
                        l.pow(r).mul(log_term.add(base_term))
                    },
                }
            },
            Self::FunctionCall { kind, arg } => {
                let u = arg.as_ref().clone();
                let du = arg.derive(var_name);
                match kind {
                    FunctionKind::Sin => u.cos().mul(du),
                    FunctionKind::Cos => Self::number(-T::one()).mul(u.sin()).mul(du),
                    FunctionKind::Ln => du.div(u),
                    FunctionKind::Exp => u.exp().mul(du),
                }
            },
        }
    }
}
