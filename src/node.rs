//! # node.rs
//!
//! The expression tree.
//!
//! A `Node` is either a leaf (a number or a variable), a binary operator
//! owning two subtrees, or an elementary function owning one. Arity is
//! fixed by the variant, so a node can never hold children inconsistent
//! with its kind. Every child is exclusively owned; no operation on a tree
//! mutates it in place.

use std::collections::BTreeSet;

use crate::operators::{BinaryOperatorKind, FunctionKind, Kind};
use crate::scalar::Scalar;

/// A node of an expression tree over the numeric type `T`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// Numeric literal.
    Number(T),

    /// Free variable reference by name.
    Variable(String),

    /// Binary operator applied to left and right subtrees.
    BinaryOperator {
        kind: BinaryOperatorKind,
        left: Box<Node<T>>,
        right: Box<Node<T>>,
    },

    /// Elementary function applied to a single subtree.
    FunctionCall {
        kind: FunctionKind,
        arg: Box<Node<T>>,
    },
}

/// Node impl constructors and accessors
impl<T> Node<T> {
    /// Creates a leaf holding a literal value.
    pub fn number(value: T) -> Self {
        Self::Number(value)
    }

    /// Creates a leaf referencing a free variable.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operator node from two already-built subtrees.
    pub fn binary(kind: BinaryOperatorKind, left: Self, right: Self) -> Self {
        Self::BinaryOperator {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a function node from an already-built operand.
    pub fn unary(kind: FunctionKind, operand: Self) -> Self {
        Self::FunctionCall {
            kind,
            arg: Box::new(operand),
        }
    }

    /// Returns the flat kind of this node.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Number(_) => Kind::Number,
            Self::Variable(_) => Kind::Variable,
            Self::BinaryOperator { kind, .. } => Kind::from(*kind),
            Self::FunctionCall { kind, .. } => Kind::from(*kind),
        }
    }

    /// Returns the literal value of a `Number` node.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Number(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the name of a `Variable` node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Returns the left child of a binary node, or the operand of a function node.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::BinaryOperator { left, .. } => Some(&**left),
            Self::FunctionCall { arg, .. } => Some(&**arg),
            _ => None,
        }
    }

    /// Returns the right child of a binary node.
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::BinaryOperator { right, .. } => Some(&**right),
            _ => None,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) | Self::Variable(_) => 1,
            Self::BinaryOperator { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::FunctionCall { arg, .. } => 1 + arg.depth(),
        }
    }

    /// Returns the distinct names of all variables referenced by the tree.
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut BTreeSet<&'a str>) {
        match self {
            Self::Number(_) => {},
            Self::Variable(name) => {
                names.insert(name.as_str());
            },
            Self::BinaryOperator { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            },
            Self::FunctionCall { arg, .. } => arg.collect_variables(names),
        }
    }
}

/// Node impl combinators used to build new trees
impl<T: Scalar> Node<T> {
    /// Create a number 0 node.
    pub fn zero() -> Self {
        Self::Number(T::zero())
    }

    /// Create a number 1 node.
    pub fn one() -> Self {
        Self::Number(T::one())
    }

    /// Create an addition node `self + other`.
    pub fn add(self, other: Self) -> Self {
        Self::binary(BinaryOperatorKind::Add, self, other)
    }

    /// Create a subtraction node `self - other`.
    pub fn sub(self, other: Self) -> Self {
        Self::binary(BinaryOperatorKind::Sub, self, other)
    }

    /// Create a multiplication node `self * other`.
    pub fn mul(self, other: Self) -> Self {
        Self::binary(BinaryOperatorKind::Mul, self, other)
    }

    /// Create a division node `self / other`.
    pub fn div(self, other: Self) -> Self {
        Self::binary(BinaryOperatorKind::Div, self, other)
    }

    /// Create a power node `self ^ exponent`.
    pub fn pow(self, exponent: Self) -> Self {
        Self::binary(BinaryOperatorKind::Pow, self, exponent)
    }

    /// Create a `sin(self)` node.
    pub fn sin(self) -> Self {
        Self::unary(FunctionKind::Sin, self)
    }

    /// Create a `cos(self)` node.
    pub fn cos(self) -> Self {
        Self::unary(FunctionKind::Cos, self)
    }

    /// Create a `ln(self)` node.
    pub fn ln(self) -> Self {
        Self::unary(FunctionKind::Ln, self)
    }

    /// Create an `exp(self)` node.
    pub fn exp(self) -> Self {
        Self::unary(FunctionKind::Exp, self)
    }

    /// Create a negation node, desugared to `0 - self` as the parser does.
    pub fn negative(self) -> Self {
        Self::zero().sub(self)
    }

    /// Returns a new tree where every `Variable` named `var_name` is
    /// replaced by a copy of `replacement`.
    pub fn substitute(&self, var_name: &str, replacement: &Self) -> Self {
        match self {
            Self::Number(value) => Self::Number(value.clone()),
            Self::Variable(name) => {
                if name == var_name {
                    replacement.clone()
                } else {
                    Self::Variable(name.clone())
                }
            },
            Self::BinaryOperator { kind, left, right } => Self::binary(
                *kind,
                left.substitute(var_name, replacement),
                right.substitute(var_name, replacement),
            ),
            Self::FunctionCall { kind, arg } => {
                Self::unary(*kind, arg.substitute(var_name, replacement))
            },
        }
    }
}

impl<T: Scalar> std::ops::Add<Node<T>> for Node<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Node::add(self, rhs)
    }
}

impl<T: Scalar> std::ops::Sub<Node<T>> for Node<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Node::sub(self, rhs)
    }
}

impl<T: Scalar> std::ops::Mul<Node<T>> for Node<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Node::mul(self, rhs)
    }
}

impl<T: Scalar> std::ops::Div<Node<T>> for Node<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        Node::div(self, rhs)
    }
}

impl<T: Scalar> std::ops::BitXor<Node<T>> for Node<T> {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Node::pow(self, rhs)
    }
}

impl<T: Scalar> std::ops::Neg for Node<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.negative()
    }
}
