//! Property-based tests for parsing, rendering, differentiation and substitution.
