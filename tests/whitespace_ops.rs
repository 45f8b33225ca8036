use textops::{
    dedent_lines, ensure_trailing_newline, indent_lines, normalize_line_endings,
    normalize_whitespace, remove_all_whitespace, remove_empty_lines, remove_extra_spaces,
    remove_trailing_newline, spaces_to_tabs, tabs_to_spaces, to_crlf, to_lf, trim_end,
    trim_lines, trim_start, trim_text, wrap_text,
};

#[test]
fn trims() {
    assert_eq!(trim_text("  hello  "), "hello");
    assert_eq!(trim_start("  hello  "), "hello  ");
    assert_eq!(trim_end("  hello  "), "  hello");
    assert_eq!(trim_text("\t\n hello \n\t"), "hello");
}

#[test]
fn remove_all_whitespace_strips_everything() {
    assert_eq!(remove_all_whitespace("a b\tc\nd"), "abcd");
    assert_eq!(remove_all_whitespace("   "), "");
}

#[test]
fn normalize_flattens_line_structure() {
    assert_eq!(normalize_whitespace("  hello    world  "), "hello world");
    assert_eq!(normalize_whitespace("a\nb\n\nc"), "a b c");
}

#[test]
fn remove_extra_spaces_keeps_newlines() {
    assert_eq!(remove_extra_spaces("  a   b  \n  c   d  "), "a b\nc d");
    assert_eq!(remove_extra_spaces("one\ntwo"), "one\ntwo");
}

#[test]
fn empty_line_removal_and_line_trimming() {
    assert_eq!(remove_empty_lines("a\n\nb\n   \nc"), "a\nb\nc");
    assert_eq!(trim_lines("  a  \n  b  "), "a\nb");
    // trim_lines preserves line count
    assert_eq!(trim_lines("  \n  \n  "), "\n\n");
}

#[test]
fn indent_and_dedent() {
    assert_eq!(indent_lines("a\nb", 2), "  a\n  b");
    assert_eq!(indent_lines("a", 0), "a");
    assert_eq!(dedent_lines("  line1\n    line2"), "line1\n  line2");
    assert_eq!(dedent_lines("line1\n  line2"), "line1\n  line2");
    assert_eq!(dedent_lines(""), "");
}

#[test]
fn dedent_ignores_blank_lines_for_the_minimum() {
    // the empty middle line must not force the minimum to zero
    assert_eq!(dedent_lines("  a\n\n  b"), "a\n\nb");
}

#[test]
fn indent_dedent_round_trip() {
    let text = "fn main() {\n    body\n}";
    assert_eq!(dedent_lines(&indent_lines(text, 4)), text);
}

#[test]
fn tab_space_conversion() {
    assert_eq!(tabs_to_spaces("\ta", 4), "    a");
    assert_eq!(tabs_to_spaces("a\tb\tc", 2), "a  b  c");
    assert_eq!(spaces_to_tabs("    a", 4), "\ta");
    // textual substitution: eight spaces become two tabs
    assert_eq!(spaces_to_tabs("        a", 4), "\t\ta");
    // six spaces: one tab and a two-space remainder
    assert_eq!(spaces_to_tabs("      a", 4), "\t  a");
    // zero tab size is a no-op, not a crash
    assert_eq!(spaces_to_tabs("  a", 0), "  a");
}

#[test]
fn line_ending_conversions() {
    assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    assert_eq!(to_lf("a\r\nb"), "a\nb");
    assert_eq!(to_crlf("a\nb"), "a\r\nb");
    // mixed input normalizes before widening
    assert_eq!(to_crlf("a\r\nb\rc"), "a\r\nb\r\nc");
}

#[test]
fn trailing_newline_handling() {
    assert_eq!(ensure_trailing_newline("abc"), "abc\n");
    assert_eq!(ensure_trailing_newline("abc\n"), "abc\n");
    assert_eq!(remove_trailing_newline("abc\n"), "abc");
    assert_eq!(remove_trailing_newline("abc"), "abc");
    // only one newline is removed
    assert_eq!(remove_trailing_newline("abc\n\n"), "abc\n");
}

#[test]
fn wrap_respects_max_length() {
    let wrapped = wrap_text("The quick brown fox jumps over the lazy dog", 20);
    for line in wrapped.split('\n') {
        assert!(line.chars().count() <= 20, "line too long: {line:?}");
    }
    assert_eq!(
        wrapped.split('\n').collect::<Vec<_>>().join(" "),
        "The quick brown fox jumps over the lazy dog"
    );
}

#[test]
fn wrap_never_splits_a_long_word() {
    let wrapped = wrap_text("tiny extraordinarily-long-token tiny", 10);
    assert!(
        wrapped
            .split('\n')
            .any(|line| line == "extraordinarily-long-token")
    );
}

#[test]
fn wrap_collapses_existing_line_structure() {
    assert_eq!(wrap_text("a\nb\nc", 80), "a b c");
    assert_eq!(wrap_text("", 80), "");
}
