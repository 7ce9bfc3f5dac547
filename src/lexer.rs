//! lexer.rs
//!
//! This module splits an expression string into a sequence of `Lexeme`s, each
//! a continuous piece of text with its position in the original string.
//!
//! Identifiers are runs of alphabetic characters, numeric literals are runs of
//! digits and dots, and every other non-whitespace character is a lexeme of
//! its own. Whitespace only separates lexemes.

use std::ops::Range;

/// Represents a single lexeme extracted from the input string.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Lexeme<'a> {
    text: &'a str,
    span: Range<usize>,
}

impl<'a> Lexeme<'a> {
    pub(crate) fn new(text: &'a str, span: Range<usize>) -> Self {
        Self { text, span }
    }

    /// Returns the text slice of the lexeme.
    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    /// Returns the start byte offset of the lexeme in the input string.
    pub(crate) fn start(&self) -> usize {
        self.span.start
    }

    /// Returns the first character of the lexeme.
    pub(crate) fn first_char(&self) -> char {
        self.text.chars().next().unwrap_or_default()
    }

    pub(crate) fn is_number(&self) -> bool {
        matches!(self.first_char(), '0'..='9' | '.')
    }

    pub(crate) fn is_identifier(&self) -> bool {
        self.first_char().is_alphabetic()
    }

    /// Returns true if the lexeme is exactly the single character `ch`.
    pub(crate) fn is_char(&self, ch: char) -> bool {
        let mut chars = self.text.chars();
        chars.next() == Some(ch) && chars.next().is_none()
    }
}

impl std::fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{name} [{start}, {end})", name = self.text, start = self.span.start, end = self.span.end)
    }
}

/// Type alias for a collection of lexemes.
pub(crate) type Lexemes<'a> = Vec<Lexeme<'a>>;

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Consumes characters while `accept` holds and returns the end offset.
fn take_while(start_idx: usize, first: char, chars: &mut CharIter, accept: fn(char) -> bool) -> usize {
    let mut end = start_idx + first.len_utf8();
    while let Some(&(idx, ch)) = chars.peek() {
        if !accept(ch) {
            break;
        }
        end = idx + ch.len_utf8();
        chars.next();
    }
    end
}

/// Splits the input string into a sequence of `Lexeme`s.
pub(crate) fn from(input: &str) -> Lexemes<'_> {
    let mut lexemes = Lexemes::default();
    let mut chars = input.char_indices().peekable();

    while let Some((start_idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }

        let end_idx = match ch {
            '0'..='9' | '.' => take_while(start_idx, ch, &mut chars, |c| c.is_ascii_digit() || c == '.'),
            c if c.is_alphabetic() => take_while(start_idx, ch, &mut chars, char::is_alphabetic),
            _ => start_idx + ch.len_utf8(),
        };

        lexemes.push(Lexeme::new(&input[start_idx..end_idx], start_idx..end_idx));
    }

    lexemes
}
