//! The shared tokenization rules.
//!
//! Counting, case conversion, and analysis all need the same notion of a
//! "word"; if each module re-derived its own pattern, word counts would
//! disagree between them. The patterns live here and everything else
//! imports them.

use once_cell::sync::Lazy;
use regex::Regex;

/// A word is a run of word characters, apostrophes, and hyphens that starts
/// and ends on a word character: `don't` and `well-known` are single words,
/// a quoted `'hello'` contributes only `hello`.
pub(crate) static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[\w'-]+\b").unwrap());

/// A sentence is a maximal run of non-terminal characters followed by one or
/// more of `.`, `!`, `?`. Text without terminal punctuation has no sentences.
pub(crate) static SENTENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());

/// A paragraph break is a newline, optional blank space, and another newline.
pub(crate) static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Any run of whitespace, newlines included.
pub(crate) static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Iterate the word tokens of `text` in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Iterate the sentence tokens of `text` in order.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE.find_iter(text).map(|m| m.as_str())
}
