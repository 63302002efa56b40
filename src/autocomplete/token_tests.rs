//! Tests for token extraction

use super::*;
use proptest::prelude::*;

#[test]
fn test_token_at_end_of_text() {
    let token = extract_token("draw a cat, happy do", 20);
    assert_eq!(token.text, "do");
    assert_eq!(token.start, 18);
    assert_eq!(token.end, 20);
}

#[test]
fn test_token_after_comma_without_space() {
    let token = extract_token("cat,dog", 7);
    assert_eq!(token.text, "dog");
    assert_eq!(token.start, 4);
}

#[test]
fn test_token_empty_after_separator() {
    let token = extract_token("cat, ", 5);
    assert!(token.is_empty());
    assert_eq!(token.text, "");
    assert_eq!(token.start, 5);
}

#[test]
fn test_token_empty_text() {
    let token = extract_token("", 0);
    assert!(token.is_empty());
    assert_eq!(token.start, 0);
}

#[test]
fn test_token_mid_text_ignores_text_after_cursor() {
    // cursor sits after "ca" in "a cat sitting"
    let token = extract_token("a cat sitting", 4);
    assert_eq!(token.text, "ca");
    assert_eq!(token.start, 2);
    assert_eq!(token.end, 4);
}

#[test]
fn test_token_newline_is_separator() {
    let token = extract_token("portrait\nsoft li", 16);
    assert_eq!(token.text, "li");
    assert_eq!(token.start, 14);
}

#[test]
fn test_token_tab_is_separator() {
    let token = extract_token("a\tbo", 4);
    assert_eq!(token.text, "bo");
}

#[test]
fn test_token_cursor_past_end_is_clamped() {
    let token = extract_token("sunset", 100);
    assert_eq!(token.text, "sunset");
    assert_eq!(token.end, 6);
}

#[test]
fn test_token_offsets_are_characters() {
    let token = extract_token("café crè", 8);
    assert_eq!(token.text, "crè");
    assert_eq!(token.start, 5);
    assert_eq!(token.char_len(), 3);
}

#[test]
fn test_is_token_separator() {
    assert!(is_token_separator(' '));
    assert!(is_token_separator(','));
    assert!(is_token_separator('\n'));
    assert!(!is_token_separator('-'));
    assert!(!is_token_separator('.'));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Whatever precedes a separator, the token is exactly the word typed after it.
    #[test]
    fn prop_token_is_word_after_last_separator(
        prefix in "[a-z ,]{0,20}",
        sep in prop::sample::select(vec![" ", ",", "\n", ", "]),
        word in "[a-z]{0,10}",
        suffix in "[a-z ,]{0,10}",
    ) {
        let text = format!("{}{}{}{}", prefix, sep, word, suffix);
        let cursor = prefix.chars().count() + sep.chars().count() + word.chars().count();
        let token = extract_token(&text, cursor);
        prop_assert_eq!(&token.text, &word);
        prop_assert_eq!(token.end, cursor);
        prop_assert_eq!(token.char_len(), word.chars().count());
    }

    // The token never contains a separator and always ends at the cursor.
    #[test]
    fn prop_token_has_no_separators(text in "\\PC{0,40}", cursor in 0usize..50) {
        let token = extract_token(&text, cursor);
        prop_assert!(!token.text.chars().any(is_token_separator));
        prop_assert!(token.start <= token.end);
        prop_assert_eq!(token.end, cursor.min(text.chars().count()));
    }
}
