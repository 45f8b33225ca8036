//! Scalar metrics over text: characters, words, lines, sentences,
//! paragraphs, and reading time.

use unicode_segmentation::UnicodeSegmentation;

use crate::tokens::{self, PARAGRAPH_BREAK};

/// Default reading speed for [`estimate_reading_time`] and
/// [`reading_time_string`], in words per minute.
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;

/// Every count in one record.
///
/// Returned by [`all_counts`] so callers that display several metrics at
/// once don't recompute the tokenization per metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextCounts {
    /// Characters including whitespace.
    pub characters: usize,
    /// Characters excluding all whitespace.
    pub characters_no_spaces: usize,
    /// Extended grapheme clusters (what a reader perceives as characters).
    pub graphemes: usize,
    /// Word tokens.
    pub words: usize,
    /// Lines, empty ones included.
    pub lines: usize,
    /// Sentences ending in `.`, `!`, or `?`.
    pub sentences: usize,
    /// Non-blank paragraph blocks.
    pub paragraphs: usize,
}

/// Count characters in `text`.
///
/// Characters are Unicode scalar values. With `include_spaces == false`,
/// every whitespace character is excluded from the count.
pub fn count_characters(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Count extended grapheme clusters in `text`.
///
/// Emoji and combining sequences count once here where
/// [`count_characters`] counts each scalar value.
pub fn count_graphemes(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Count word tokens in `text`.
///
/// Runs of separators contribute nothing: `"a   b"` is two words.
pub fn count_words(text: &str) -> usize {
    tokens::words(text).count()
}

/// Count lines in `text`, splitting on `\n` only.
///
/// With `count_empty == false`, lines that are empty after trimming are
/// excluded. Empty text has zero lines.
pub fn count_lines(text: &str, count_empty: bool) -> usize {
    if text.is_empty() {
        return 0;
    }
    if count_empty {
        text.split('\n').count()
    } else {
        text.split('\n').filter(|line| !line.trim().is_empty()).count()
    }
}

/// Count sentences in `text`.
///
/// Abbreviations are not special-cased: `"Mr. Smith."` is two sentences.
pub fn count_sentences(text: &str) -> usize {
    tokens::sentences(text).count()
}

/// Count paragraphs in `text`, separated by one or more blank lines.
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count()
}

/// Compute all counts in one call.
pub fn all_counts(text: &str) -> TextCounts {
    TextCounts {
        characters: count_characters(text, true),
        characters_no_spaces: count_characters(text, false),
        graphemes: count_graphemes(text),
        words: count_words(text),
        lines: count_lines(text, true),
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
    }
}

/// Estimate reading time in whole minutes, rounded up.
///
/// Returns 0 for text with no words. A `words_per_minute` of 0 falls back
/// to [`DEFAULT_WORDS_PER_MINUTE`].
pub fn estimate_reading_time(text: &str, words_per_minute: usize) -> usize {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    count_words(text).div_ceil(wpm)
}

/// Format reading time for display: `"< 1 min read"` under one minute,
/// otherwise `"{n} min read"`.
pub fn reading_time_string(text: &str, words_per_minute: usize) -> String {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let words = count_words(text);
    if words < wpm {
        return "< 1 min read".to_string();
    }
    format!("{} min read", words.div_ceil(wpm))
}
