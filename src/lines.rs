//! Line-granularity reordering, filtering, and decoration.
//!
//! Lines are the segments between `\n` separators; text with N newlines has
//! N+1 lines, empty ones included. Callers with `\r\n` input should
//! normalize first via [`crate::whitespace::to_lf`].

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;

// First signed/decimal number token in a line, e.g. "-3", "10", "2.5".
static LINE_NUMBER_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+\.?\d*").unwrap());
// Leading line-number token: digits, optional dot, trailing space.
static LEADING_LINE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.?\s*").unwrap());

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Which comparator [`sort_lines`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortType {
    #[default]
    Alphabetical,
    Numerical,
    Length,
}

/// Sort lines with the given comparator and direction.
pub fn sort_lines(text: &str, sort_type: SortType, order: SortOrder, case_sensitive: bool) -> String {
    match sort_type {
        SortType::Alphabetical => sort_lines_alphabetically(text, order, case_sensitive),
        SortType::Numerical => sort_lines_numerically(text, order),
        SortType::Length => sort_lines_by_length(text, order),
    }
}

/// Sort lines lexicographically by code point, case-folded unless
/// `case_sensitive`. The sort is stable, so equal keys keep their order.
pub fn sort_lines_alphabetically(text: &str, order: SortOrder, case_sensitive: bool) -> String {
    let mut keyed: Vec<(String, &str)> = text
        .split('\n')
        .map(|line| {
            let key = if case_sensitive {
                line.to_string()
            } else {
                line.to_lowercase()
            };
            (key, line)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });
    join(keyed.into_iter().map(|(_, line)| line))
}

/// Sort lines by the first number found in each line.
///
/// The key is the first `-?\d+\.?\d*` token, parsed as a float; lines with
/// no number sort as 0.
pub fn sort_lines_numerically(text: &str, order: SortOrder) -> String {
    let mut keyed: Vec<(f64, &str)> = text
        .split('\n')
        .map(|line| {
            let key = LINE_NUMBER_KEY
                .find(line)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .unwrap_or(0.0);
            (key, line)
        })
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.total_cmp(b),
        SortOrder::Desc => b.total_cmp(a),
    });
    join(keyed.into_iter().map(|(_, line)| line))
}

/// Sort lines by character count.
pub fn sort_lines_by_length(text: &str, order: SortOrder) -> String {
    let mut keyed: Vec<(usize, &str)> = text
        .split('\n')
        .map(|line| (line.chars().count(), line))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    });
    join(keyed.into_iter().map(|(_, line)| line))
}

/// Remove duplicate lines, keyed by content (case-folded unless
/// `case_sensitive`).
///
/// With `keep_first` the first occurrence survives in place; otherwise the
/// last occurrence survives, in its original position.
pub fn deduplicate_lines(text: &str, case_sensitive: bool, keep_first: bool) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if !keep_first {
        lines.reverse();
    }

    let mut seen = HashSet::new();
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let key = if case_sensitive {
            line.to_string()
        } else {
            line.to_lowercase()
        };
        if seen.insert(key) {
            kept.push(line);
        }
    }

    if !keep_first {
        kept.reverse();
    }
    kept.join("\n")
}

/// Reverse the order of lines.
pub fn reverse_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.reverse();
    lines.join("\n")
}

/// Shuffle lines into a uniform random permutation using the thread RNG.
pub fn shuffle_lines(text: &str) -> String {
    shuffle_lines_with(text, &mut rand::thread_rng())
}

/// Shuffle lines with a caller-supplied generator.
///
/// Fisher-Yates over the line array; a seeded `rng` makes the permutation
/// reproducible.
pub fn shuffle_lines_with<R: Rng + ?Sized>(text: &str, rng: &mut R) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    lines.shuffle(rng);
    lines.join("\n")
}

/// Keep the lines for which `predicate(line, index)` returns true.
pub fn filter_lines<F>(text: &str, mut predicate: F) -> String
where
    F: FnMut(&str, usize) -> bool,
{
    text.split('\n')
        .enumerate()
        .filter(|(index, line)| predicate(line, *index))
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep lines containing `search` (or not containing it, with `invert`).
pub fn filter_lines_containing(
    text: &str,
    search: &str,
    case_sensitive: bool,
    invert: bool,
) -> String {
    let needle = if case_sensitive {
        search.to_string()
    } else {
        search.to_lowercase()
    };
    filter_lines(text, |line, _| {
        let contains = if case_sensitive {
            line.contains(needle.as_str())
        } else {
            line.to_lowercase().contains(needle.as_str())
        };
        if invert { !contains } else { contains }
    })
}

/// Keep lines matching `pattern` (or not matching it, with `invert`).
pub fn filter_lines_matching(text: &str, pattern: &Regex, invert: bool) -> String {
    filter_lines(text, |line, _| {
        let matches = pattern.is_match(line);
        if invert { !matches } else { matches }
    })
}

/// Number each line, starting at `start_at`, with `separator` between the
/// number and the line.
pub fn add_line_numbers(text: &str, start_at: usize, separator: &str) -> String {
    text.split('\n')
        .enumerate()
        .map(|(index, line)| format!("{}{}{}", start_at.saturating_add(index), separator, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip a leading number token from each line.
///
/// Any line starting with digits (with optional dot and trailing space) is
/// treated as numbered, whether or not the numbering came from
/// [`add_line_numbers`].
pub fn remove_line_numbers(text: &str) -> String {
    text.split('\n')
        .map(|line| LEADING_LINE_NUMBER.replace(line, "").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prepend `prefix` to every line.
pub fn add_line_prefix(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append `suffix` to every line.
pub fn add_line_suffix(text: &str, suffix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{line}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Wrap every line in `prefix` and `suffix`.
pub fn wrap_lines(text: &str, prefix: &str, suffix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}{suffix}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract lines `start..=end` (1-indexed, inclusive). Out-of-range bounds
/// are clamped; an empty range yields an empty string.
pub fn extract_lines(text: &str, start: usize, end: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let from = start.saturating_sub(1).min(lines.len());
    let to = end.min(lines.len());
    if from >= to {
        return String::new();
    }
    lines[from..to].join("\n")
}

/// Delete lines `start..=end` (1-indexed, inclusive). Out-of-range bounds
/// are clamped; an empty range deletes nothing.
pub fn delete_lines(text: &str, start: usize, end: usize) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let from = start.saturating_sub(1).min(lines.len());
    let to = end.min(lines.len());
    if from >= to {
        return text.to_string();
    }
    let mut kept: Vec<&str> = Vec::with_capacity(lines.len() - (to - from));
    kept.extend(&lines[..from]);
    kept.extend(&lines[to..]);
    kept.join("\n")
}

/// Join all lines into one, with `separator` between them.
pub fn join_lines(text: &str, separator: &str) -> String {
    text.split('\n').collect::<Vec<_>>().join(separator)
}

/// Re-split text on `delimiter`, one segment per line. An empty delimiter
/// splits between every character.
pub fn split_into_lines(text: &str, delimiter: &str) -> String {
    if delimiter.is_empty() {
        return text
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join("\n");
    }
    text.split(delimiter).collect::<Vec<_>>().join("\n")
}

fn join<'a>(lines: impl Iterator<Item = &'a str>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
