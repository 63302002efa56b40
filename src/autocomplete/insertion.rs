//! Suggestion insertion
//!
//! Replaces the token under the cursor with accepted text. The token
//! boundary is recomputed from the field at acceptance time, so a cursor that
//! moved while the popup was open is honoured.

use super::prompt_field::PromptField;
use super::token::extract_token;

/// Replace the token ending at `cursor` with `replacement`
///
/// Returns the new text and the cursor offset just after the inserted text.
pub fn splice_token(text: &str, cursor: usize, replacement: &str) -> (String, usize) {
    let token = extract_token(text, cursor);

    let mut new_text: String = text.chars().take(token.start).collect();
    new_text.push_str(replacement);
    new_text.extend(text.chars().skip(token.end));

    (new_text, token.start + replacement.chars().count())
}

/// Splice `replacement` into the field at its current cursor
pub fn insert_at_cursor<F: PromptField + ?Sized>(field: &mut F, replacement: &str) {
    let text = field.text();
    let (new_text, new_cursor) = splice_token(&text, field.cursor_offset(), replacement);
    field.set_text_and_cursor(&new_text, new_cursor);
}

#[cfg(test)]
#[path = "insertion_tests.rs"]
mod insertion_tests;
