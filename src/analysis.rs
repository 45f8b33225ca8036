//! Frequency tables, aggregate statistics, readability scoring, and
//! pattern extraction.

use std::borrow::Cow;
use std::collections::HashSet;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::counting;
use crate::tokens;

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s)]+").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[\w]+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[\w]+").unwrap());

/// How often one character occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterFrequency {
    pub character: char,
    pub count: usize,
    /// Share of all counted characters, in percent.
    pub percentage: f64,
}

/// How often one word occurs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordFrequency {
    pub word: String,
    pub count: usize,
    /// Share of all word tokens (not unique words), in percent.
    pub percentage: f64,
}

/// Aggregate snapshot of a text, computed fresh on every call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStatistics {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// Mean word length in characters, rounded to 1 decimal.
    pub average_word_length: f64,
    /// Mean words per sentence, rounded to 1 decimal.
    pub average_sentence_length: f64,
    pub longest_word: String,
    pub shortest_word: String,
    /// Case-folded unique word count.
    pub unique_words: usize,
    /// Display string from [`counting::reading_time_string`].
    pub reading_time: String,
}

/// Character frequency table, most frequent first.
///
/// Space, tab, and newline are never counted; percentages are relative to
/// the characters that are. The sort is stable, so characters with equal
/// counts stay in first-occurrence order. `limit` truncates the table.
pub fn character_frequency(
    text: &str,
    case_sensitive: bool,
    limit: Option<usize>,
) -> Vec<CharacterFrequency> {
    let processed = fold(text, case_sensitive);
    let mut counts: IndexMap<char, usize> = IndexMap::new();
    for ch in processed.chars() {
        if matches!(ch, ' ' | '\n' | '\t') {
            continue;
        }
        *counts.entry(ch).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    let mut table: Vec<CharacterFrequency> = counts
        .into_iter()
        .map(|(character, count)| CharacterFrequency {
            character,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        table.truncate(limit);
    }
    table
}

/// Word frequency table, most frequent first.
///
/// Percentages are relative to the total token count, so a word appearing
/// twice in ten tokens reads 20.0 even when other words repeat. Ties stay
/// in first-occurrence order.
pub fn word_frequency(text: &str, case_sensitive: bool, limit: Option<usize>) -> Vec<WordFrequency> {
    let processed = fold(text, case_sensitive);
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    let mut total = 0usize;
    for word in tokens::words(&processed) {
        *counts.entry(word).or_insert(0) += 1;
        total += 1;
    }

    let mut table: Vec<WordFrequency> = counts
        .into_iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_string(),
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();
    table.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        table.truncate(limit);
    }
    table
}

/// Comprehensive statistics for `text`.
pub fn text_statistics(text: &str) -> TextStatistics {
    let counts = counting::all_counts(text);
    let words: Vec<&str> = tokens::words(text).collect();

    let unique_words = words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<HashSet<_>>()
        .len();

    let total_word_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let average_word_length = if words.is_empty() {
        0.0
    } else {
        round1(total_word_chars as f64 / words.len() as f64)
    };
    let average_sentence_length = if counts.sentences == 0 {
        0.0
    } else {
        round1(words.len() as f64 / counts.sentences as f64)
    };

    // Stable descending-length sort: longest is the first occurrence of the
    // maximum, shortest the last occurrence of the minimum.
    let mut by_length = words.clone();
    by_length.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
    let longest_word = by_length.first().copied().unwrap_or("").to_string();
    let shortest_word = by_length.last().copied().unwrap_or("").to_string();

    TextStatistics {
        characters: counts.characters,
        characters_no_spaces: counts.characters_no_spaces,
        words: counts.words,
        lines: counts.lines,
        sentences: counts.sentences,
        paragraphs: counts.paragraphs,
        average_word_length,
        average_sentence_length,
        longest_word,
        shortest_word,
        unique_words,
        reading_time: counting::reading_time_string(text, counting::DEFAULT_WORDS_PER_MINUTE),
    }
}

/// Flesch Reading Ease score, rounded to 1 decimal and clamped to [0, 100].
///
/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
/// Text with no words or no sentences scores 0.
pub fn readability_score(text: &str) -> f64 {
    let words = counting::count_words(text);
    let sentences = counting::count_sentences(text);
    if words == 0 || sentences == 0 {
        return 0.0;
    }

    let syllables: usize = tokens::words(text).map(syllables_in_word).sum();
    let score = 206.835
        - 1.015 * (words as f64 / sentences as f64)
        - 84.6 * (syllables as f64 / words as f64);
    round1(score).clamp(0.0, 100.0)
}

/// Describe a Flesch score as one of seven bands with an approximate US
/// grade level.
pub fn readability_level(score: f64) -> &'static str {
    if score >= 90.0 {
        "Very Easy (5th grade)"
    } else if score >= 80.0 {
        "Easy (6th grade)"
    } else if score >= 70.0 {
        "Fairly Easy (7th grade)"
    } else if score >= 60.0 {
        "Standard (8th-9th grade)"
    } else if score >= 50.0 {
        "Fairly Difficult (10th-12th grade)"
    } else if score >= 30.0 {
        "Difficult (College)"
    } else {
        "Very Difficult (College graduate)"
    }
}

/// All `http(s)` URLs in `text`, in order, duplicates included.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL.find_iter(text).map(|m| m.as_str()).collect()
}

/// All email addresses in `text`, in order, duplicates included.
pub fn extract_emails(text: &str) -> Vec<&str> {
    EMAIL.find_iter(text).map(|m| m.as_str()).collect()
}

/// All `#hashtag` tokens in `text`, in order, duplicates included.
pub fn extract_hashtags(text: &str) -> Vec<&str> {
    HASHTAG.find_iter(text).map(|m| m.as_str()).collect()
}

/// All `@mention` tokens in `text`, in order, duplicates included.
pub fn extract_mentions(text: &str) -> Vec<&str> {
    MENTION.find_iter(text).map(|m| m.as_str()).collect()
}

/// Count non-overlapping occurrences of `substring`.
///
/// The cursor advances past each match, so `"aa"` occurs once in `"aaa"`.
/// An empty substring counts 0.
pub fn count_occurrences(text: &str, substring: &str, case_sensitive: bool) -> usize {
    if substring.is_empty() {
        return 0;
    }
    let haystack = fold(text, case_sensitive);
    let needle = fold(substring, case_sensitive);
    haystack.matches(needle.as_ref()).count()
}

/// Byte offsets of every non-overlapping occurrence of `substring`.
///
/// With `case_sensitive == false` the offsets index the case-folded text.
/// Always the same length as [`count_occurrences`] reports.
pub fn find_all_positions(text: &str, substring: &str, case_sensitive: bool) -> Vec<usize> {
    if substring.is_empty() {
        return Vec::new();
    }
    let haystack = fold(text, case_sensitive);
    let needle = fold(substring, case_sensitive);
    haystack
        .match_indices(needle.as_ref())
        .map(|(offset, _)| offset)
        .collect()
}

// Approximate syllable count: short words score 1, otherwise vowel-group
// runs, minus one for a silent trailing 'e', floored at 1.
fn syllables_in_word(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut groups = 0usize;
    let mut in_group = false;
    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !in_group {
            groups += 1;
        }
        in_group = is_vowel;
    }

    let mut count = groups.max(1);
    if word.ends_with('e') {
        count -= 1;
    }
    count.max(1)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn fold(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}
