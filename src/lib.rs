//! Pure text transformation and analysis: counting, case conversion,
//! whitespace normalization, line operations, and statistics.
//!
//! Every function takes a `&str` plus explicit parameters and returns a new
//! `String` or a plain record. There is no shared state and no I/O, so any
//! function may be called from any thread at any time.

pub mod analysis;
pub mod case;
pub mod counting;
pub mod lines;
pub mod tokens;
pub mod whitespace;

pub use crate::analysis::{
    CharacterFrequency, TextStatistics, WordFrequency, character_frequency, count_occurrences,
    extract_emails, extract_hashtags, extract_mentions, extract_urls, find_all_positions,
    readability_level, readability_score, text_statistics, word_frequency,
};
pub use crate::case::{
    capitalize_first, capitalize_words, invert_case, to_alternating_case, to_camel_case,
    to_constant_case, to_dot_case, to_kebab_case, to_lower_case, to_pascal_case,
    to_sentence_case, to_snake_case, to_title_case, to_upper_case,
};
pub use crate::counting::{
    DEFAULT_WORDS_PER_MINUTE, TextCounts, all_counts, count_characters, count_graphemes,
    count_lines, count_paragraphs, count_sentences, count_words, estimate_reading_time,
    reading_time_string,
};
pub use crate::lines::{
    SortOrder, SortType, add_line_numbers, add_line_prefix, add_line_suffix, deduplicate_lines,
    delete_lines, extract_lines, filter_lines, filter_lines_containing, filter_lines_matching,
    join_lines, remove_line_numbers, reverse_lines, shuffle_lines, shuffle_lines_with,
    sort_lines, sort_lines_alphabetically, sort_lines_by_length, sort_lines_numerically,
    split_into_lines, wrap_lines,
};
pub use crate::whitespace::{
    dedent_lines, ensure_trailing_newline, indent_lines, normalize_line_endings,
    normalize_whitespace, remove_all_whitespace, remove_empty_lines, remove_extra_spaces,
    remove_trailing_newline, spaces_to_tabs, tabs_to_spaces, to_crlf, to_lf, trim_end,
    trim_lines, trim_start, trim_text, wrap_text,
};
