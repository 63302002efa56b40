/// A text field the suggestion controller reads from and splices into
///
/// Offsets are character offsets into the whole text; line breaks count as
/// one character.
pub trait PromptField {
    fn text(&self) -> String;

    fn cursor_offset(&self) -> usize;

    /// Replace the whole text and place the cursor at `cursor`
    fn set_text_and_cursor(&mut self, text: &str, cursor: usize);
}
