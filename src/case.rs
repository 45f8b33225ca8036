//! Case-style rewrites. Every function is pure `&str -> String`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::tokens::{WHITESPACE, WORD};

/// Words left uncapitalized in Title Case unless they are the first or last
/// word: articles, coordinating conjunctions, and short prepositions.
const MINOR_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "as", "at", "by", "from", "in", "into",
    "of", "on", "onto", "to", "with",
];

static NON_ALPHANUMERIC_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]+").unwrap());

/// Convert `text` to UPPERCASE.
pub fn to_upper_case(text: &str) -> String {
    text.to_uppercase()
}

/// Convert `text` to lowercase.
pub fn to_lower_case(text: &str) -> String {
    text.to_lowercase()
}

/// Convert `text` to Title Case.
///
/// Minor words (articles, conjunctions, short prepositions) stay lowercase
/// except in first or last position, which is always capitalized:
/// `"the lord of the rings"` becomes `"The Lord of the Rings"`.
pub fn to_title_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let parts: Vec<&str> = WHITESPACE.split(&lowered).collect();
    let last = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || i == last || !MINOR_WORDS.contains(word) {
                capitalize(word)
            } else {
                (*word).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first character of the whole text and lowercase the rest.
pub fn to_sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Convert `text` to camelCase.
pub fn to_camel_case(text: &str) -> String {
    let collapsed = collapse_separators(text);
    let mut chars = collapsed.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `text` to PascalCase.
pub fn to_pascal_case(text: &str) -> String {
    capitalize(&collapse_separators(text))
}

/// Convert `text` to snake_case.
pub fn to_snake_case(text: &str) -> String {
    delimiter_case(text, '_')
}

/// Convert `text` to kebab-case.
pub fn to_kebab_case(text: &str) -> String {
    delimiter_case(text, '-')
}

/// Convert `text` to dot.case.
pub fn to_dot_case(text: &str) -> String {
    delimiter_case(text, '.')
}

/// Convert `text` to CONSTANT_CASE.
pub fn to_constant_case(text: &str) -> String {
    to_snake_case(text).to_uppercase()
}

/// Swap the case of every alphabetic character; everything else passes
/// through unchanged.
pub fn invert_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_uppercase() {
            out.extend(ch.to_lowercase());
        } else if ch.is_lowercase() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Convert `text` to aLtErNaTiNg CaSe.
///
/// Only alphabetic characters consume an alternation step; punctuation and
/// digits pass through without flipping the state.
pub fn to_alternating_case(text: &str, start_with_upper: bool) -> String {
    let mut upper = start_with_upper;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if upper {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            upper = !upper;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Capitalize the first letter of every word token. Characters after the
/// first are left as they are, not forced lowercase.
pub fn capitalize_words(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

/// Capitalize only the very first character of `text`.
pub fn capitalize_first(text: &str) -> String {
    capitalize(text)
}

// First character uppercased, the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Drop each run of non-alphanumeric characters and uppercase the character
// that follows it. A trailing run has no follower and is dropped outright.
fn collapse_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_separator {
                out.extend(ch.to_uppercase());
                pending_separator = false;
            } else {
                out.push(ch);
            }
        } else {
            pending_separator = true;
        }
    }
    out
}

// Joiner before each case boundary (an ASCII uppercase letter following a
// lowercase letter or digit), then every non-alphanumeric run becomes a
// single joiner, joiners are trimmed from the ends, and the result is
// lowercased. Marking only real boundaries keeps CONSTANT_CASE input from
// exploding into one segment per letter.
fn delimiter_case(text: &str, joiner: char) -> String {
    let mut marked = String::with_capacity(text.len() + text.len() / 4);
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if ch.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            marked.push(joiner);
        }
        marked.push(ch);
        prev = Some(ch);
    }
    let joiner_str = joiner.to_string();
    NON_ALPHANUMERIC_RUN
        .replace_all(&marked, joiner_str.as_str())
        .trim_matches(joiner)
        .to_lowercase()
}
