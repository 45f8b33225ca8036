use textops::{
    capitalize_first, capitalize_words, invert_case, to_alternating_case, to_camel_case,
    to_constant_case, to_dot_case, to_kebab_case, to_lower_case, to_pascal_case,
    to_sentence_case, to_snake_case, to_title_case, to_upper_case,
};

#[test]
fn upper_and_lower() {
    assert_eq!(to_upper_case("Hello, World!"), "HELLO, WORLD!");
    assert_eq!(to_lower_case("Hello, World!"), "hello, world!");
    assert_eq!(to_upper_case(""), "");
}

#[test]
fn title_case_keeps_minor_words_lowercase() {
    assert_eq!(to_title_case("the lord of the rings"), "The Lord of the Rings");
    assert_eq!(to_title_case("a tale of two cities"), "A Tale of Two Cities");
    assert_eq!(to_title_case("war and peace"), "War and Peace");
}

#[test]
fn title_case_always_capitalizes_first_and_last() {
    // "with" is a minor word but lands in last position
    assert_eq!(to_title_case("to live with"), "To Live With");
    // single word is both first and last
    assert_eq!(to_title_case("the"), "The");
}

#[test]
fn title_case_lowercases_everything_first() {
    assert_eq!(to_title_case("THE QUICK BROWN FOX"), "The Quick Brown Fox");
}

#[test]
fn sentence_case() {
    assert_eq!(to_sentence_case("hello WORLD. THIS too."), "Hello world. this too.");
    assert_eq!(to_sentence_case(""), "");
    assert_eq!(to_sentence_case("x"), "X");
}

#[test]
fn camel_and_pascal() {
    assert_eq!(to_camel_case("hello world example"), "helloWorldExample");
    assert_eq!(to_camel_case("Hello-world_example"), "helloWorldExample");
    assert_eq!(to_pascal_case("hello world example"), "HelloWorldExample");
    assert_eq!(to_pascal_case("hello"), "Hello");
}

#[test]
fn camel_case_is_idempotent() {
    let once = to_camel_case("some mixed-up_input text");
    assert_eq!(to_camel_case(&once), once);
}

#[test]
fn snake_kebab_dot_constant() {
    assert_eq!(to_snake_case("helloWorld"), "hello_world");
    assert_eq!(to_snake_case("Hello World"), "hello_world");
    assert_eq!(to_snake_case("  hello   world  "), "hello_world");
    assert_eq!(to_kebab_case("helloWorld"), "hello-world");
    assert_eq!(to_kebab_case("Hello, World!"), "hello-world");
    assert_eq!(to_dot_case("helloWorld"), "hello.world");
    assert_eq!(to_constant_case("helloWorld"), "HELLO_WORLD");
}

#[test]
fn delimited_cases_are_idempotent() {
    assert_eq!(to_snake_case("hello_world"), "hello_world");
    assert_eq!(to_kebab_case("hello-world"), "hello-world");
    assert_eq!(to_dot_case("hello.world"), "hello.world");
    // constant case survives a second pass unchanged
    assert_eq!(to_constant_case("HELLO_WORLD"), "HELLO_WORLD");
}

#[test]
fn invert_swaps_alphabetic_only() {
    assert_eq!(invert_case("Hello World"), "hELLO wORLD");
    assert_eq!(invert_case("abc123XYZ"), "ABC123xyz");
    assert_eq!(invert_case("1234!?"), "1234!?");
}

#[test]
fn alternating_case_skips_non_letters() {
    assert_eq!(to_alternating_case("hello", false), "hElLo");
    assert_eq!(to_alternating_case("hello", true), "HeLlO");
    // digits and punctuation pass through without consuming a step
    assert_eq!(to_alternating_case("a1b2c", false), "a1B2c");
}

#[test]
fn capitalize_words_uses_word_tokens() {
    assert_eq!(capitalize_words("hello world"), "Hello World");
    // a contraction is one token, so only its first letter changes
    assert_eq!(capitalize_words("don't stop"), "Don't Stop");
    // later characters are left alone, not lowercased
    assert_eq!(capitalize_words("hELLO wORLD"), "HELLO WORLD");
}

#[test]
fn capitalize_first_touches_one_character() {
    assert_eq!(capitalize_first("hello world"), "Hello world");
    assert_eq!(capitalize_first("hELLO"), "HELLO");
    assert_eq!(capitalize_first(""), "");
}
