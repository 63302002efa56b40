//! Token extraction
//!
//! A token is the run of characters between the last whitespace or comma
//! before the cursor and the cursor itself.

/// The word under edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Character offset where the token begins
    pub start: usize,
    /// Character offset of the cursor (exclusive end)
    pub end: usize,
    pub text: String,
}

impl Token {
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub fn is_token_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == ','
}

/// Extract the token ending at `cursor` (a character offset, clamped to the
/// text length)
pub fn extract_token(text: &str, cursor: usize) -> Token {
    let before: Vec<char> = text.chars().take(cursor).collect();
    let end = before.len();
    let start = before
        .iter()
        .rposition(|&ch| is_token_separator(ch))
        .map_or(0, |i| i + 1);

    Token {
        start,
        end,
        text: before[start..].iter().collect(),
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;
