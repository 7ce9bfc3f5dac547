//! # variable.rs
//!
//! This module provides the variable bindings consulted by evaluation.
//!
//! Any type implementing `Bindings<T>` can supply values for the free
//! variables of a tree. It is implemented for the standard map types and
//! for `Variables<T>`, a small named-value table.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Source of values for the free variables of an expression tree.
pub trait Bindings<T> {
    /// Returns the value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<&T>;
}

impl<T, S: BuildHasher> Bindings<T> for HashMap<String, T, S> {
    fn lookup(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

impl<T> Bindings<T> for BTreeMap<String, T> {
    fn lookup(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

/// A collection of named variables for expression evaluation.
///
/// `Variables` stores a mapping from variable names to values of type `T`,
/// which is usually `f64` or `num_complex::Complex<f64>`.
///
/// # Examples
///
/// ```
/// use exprdiff::Variables;
/// use num_complex::Complex;
///
/// let mut vars: Variables<Complex<f64>> = Variables::default();
/// vars.insert(&[("x", Complex::new(1.0, 0.0)), ("y", Complex::new(2.0, 3.0))]);
///
/// assert!(vars.contains("x"));
/// assert_eq!(vars.get("y"), Some(&Complex::new(2.0, 3.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Variables<T> {
    table: HashMap<String, T>,
}

impl<T> Variables<T> {
    /// Creates a new empty `Variables` table.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Constructs a `Variables` table from a slice of key-value pairs.
    ///
    /// Values can be any type convertible into `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exprdiff::Variables;
    ///
    /// let vars: Variables<f64> = Variables::from(&[("a", 1.0_f32), ("b", 2.0)]);
    /// assert_eq!(vars.get("a"), Some(&1.0));
    /// ```
    pub fn from<V>(items: &[(&str, V)]) -> Self
    where
        V: Clone + Into<T>,
    {
        let mut vars = Self::new();
        vars.insert(items);
        vars
    }

    /// Inserts multiple variables into the table.
    ///
    /// A name that is already bound is overwritten.
    pub fn insert<V>(&mut self, items: &[(&str, V)])
    where
        V: Clone + Into<T>,
    {
        for (key, val) in items {
            self.table.insert(key.to_string(), val.clone().into());
        }
    }

    /// Checks if a variable with the given name exists in the table.
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Retrieves a reference to the value of a variable by name.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.table.get(key)
    }

    /// Clears all variables from the table.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<T> Default for Variables<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bindings<T> for Variables<T> {
    fn lookup(&self, name: &str) -> Option<&T> {
        self.get(name)
    }
}

#[cfg(test)]
mod variables_tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn test_insert_and_get() {
        let mut vars: Variables<Complex<f64>> = Variables::new();
        vars.insert(&[("a", Complex::new(1.0, 0.0)), ("b", Complex::new(2.0, 3.0))]);

        assert_eq!(vars.get("a"), Some(&Complex::new(1.0, 0.0)));
        assert_eq!(vars.get("b"), Some(&Complex::new(2.0, 3.0)));
        assert_eq!(vars.get("c"), None);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut vars: Variables<f64> = Variables::new();
        vars.insert(&[("x", 1.0)]);
        vars.insert(&[("x", 2.0)]);
        assert_eq!(vars.get("x"), Some(&2.0));
    }

    #[test]
    fn test_contains() {
        let mut vars: Variables<f64> = Variables::new();
        vars.insert(&[("x", 5.0)]);

        assert!(vars.contains("x"));
        assert!(!vars.contains("y"));
    }

    #[test]
    fn test_clear() {
        let mut vars: Variables<f64> = Variables::new();
        vars.insert(&[("foo", 1.0)]);
        assert!(vars.contains("foo"));

        vars.clear();
        assert!(!vars.contains("foo"));
        assert_eq!(vars.get("foo"), None);
    }

    #[test]
    fn test_from_slice_converts_values() {
        let vars: Variables<Complex<f64>> = Variables::from(&[("p", 3.0), ("q", 4.5)]);

        assert_eq!(vars.get("p"), Some(&Complex::new(3.0, 0.0)));
        assert_eq!(vars.get("q"), Some(&Complex::new(4.5, 0.0)));
    }

    #[test]
    fn test_default() {
        let vars = Variables::<f64>::default();
        assert!(!vars.contains("anything"));
    }

    #[test]
    fn test_bindings_impls() {
        let vars = Variables::<f64>::from(&[("x", 1.0)]);
        assert_eq!(vars.lookup("x"), Some(&1.0));

        let hash: HashMap<String, f64> = [("x".to_string(), 2.0)].into_iter().collect();
        assert_eq!(hash.lookup("x"), Some(&2.0));
        assert_eq!(hash.lookup("y"), None);

        let tree: BTreeMap<String, f64> = [("x".to_string(), 3.0)].into_iter().collect();
        assert_eq!(tree.lookup("x"), Some(&3.0));
    }
}
