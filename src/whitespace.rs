//! Spacing, indentation, and line-ending normalization.

use crate::tokens::WHITESPACE;

/// Trim whitespace from both ends of `text`.
pub fn trim_text(text: &str) -> String {
    text.trim().to_string()
}

/// Trim whitespace from the start of `text`.
pub fn trim_start(text: &str) -> String {
    text.trim_start().to_string()
}

/// Trim whitespace from the end of `text`.
pub fn trim_end(text: &str) -> String {
    text.trim_end().to_string()
}

/// Delete every whitespace character, newlines included.
pub fn remove_all_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Collapse every whitespace run to a single space and trim the ends.
///
/// This flattens line structure; use [`remove_extra_spaces`] to collapse
/// spacing while keeping line breaks.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Collapse whitespace runs within each line and trim each line, keeping
/// `\n` boundaries where they are.
pub fn remove_extra_spaces(text: &str) -> String {
    text.split('\n')
        .map(|line| WHITESPACE.replace_all(line, " ").trim().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drop lines that are empty after trimming.
pub fn remove_empty_lines(text: &str) -> String {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trim each line independently, preserving line count and order.
pub fn trim_lines(text: &str) -> String {
    text.split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix every line with `spaces` spaces.
pub fn indent_lines(text: &str, spaces: usize) -> String {
    let indent = " ".repeat(spaces);
    text.split('\n')
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip the common leading whitespace from every line.
///
/// The minimum leading-whitespace width is computed over non-blank lines
/// and exactly that many characters are removed from each line, so relative
/// indentation is preserved: `"  line1\n    line2"` dedents to
/// `"line1\n  line2"`. Blank lines shorter than the minimum become empty.
pub fn dedent_lines(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min();

    match min_indent {
        None | Some(0) => text.to_string(),
        Some(width) => lines
            .iter()
            .map(|line| {
                line.char_indices()
                    .nth(width)
                    .map(|(byte, _)| &line[byte..])
                    .unwrap_or("")
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Replace every tab with `tab_size` spaces.
pub fn tabs_to_spaces(text: &str, tab_size: usize) -> String {
    text.replace('\t', &" ".repeat(tab_size))
}

/// Replace each run of exactly `tab_size` spaces with a tab, left to right.
///
/// This is a textual substitution, not indentation-aware: eight spaces with
/// `tab_size` 4 become two tabs wherever they appear. A `tab_size` of 0 is
/// a no-op.
pub fn spaces_to_tabs(text: &str, tab_size: usize) -> String {
    if tab_size == 0 {
        return text.to_string();
    }
    text.replace(&" ".repeat(tab_size), "\t")
}

/// Normalize `\r\n` and bare `\r` to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Convert line endings to LF. Alias of [`normalize_line_endings`].
pub fn to_lf(text: &str) -> String {
    normalize_line_endings(text)
}

/// Convert line endings to CRLF.
pub fn to_crlf(text: &str) -> String {
    normalize_line_endings(text).replace('\n', "\r\n")
}

/// Append a trailing `\n` unless one is already present. Idempotent.
pub fn ensure_trailing_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// Remove a single trailing `\n` if present.
pub fn remove_trailing_newline(text: &str) -> String {
    text.strip_suffix('\n').unwrap_or(text).to_string()
}

/// Greedy word-wrap to `max_length` characters per line.
///
/// Words accumulate onto the current line while they fit; a word longer
/// than `max_length` is placed alone on its own line, never split.
pub fn wrap_text(text: &str, max_length: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in WHITESPACE.split(text).filter(|w| !w.is_empty()) {
        let word_len = word.chars().count();
        if current.chars().count() + word_len + 1 <= max_length {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}
