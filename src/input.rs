/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Single-line text buffer with a character-based cursor.
///
/// Cyrillic input is the common case here, so every cursor operation works
/// on characters rather than bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole buffer and move the cursor to the end
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let byte_pos = char_to_byte_index(&self.text, self.cursor);
            self.text.remove(byte_pos);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_cyrillic() {
        let mut input = TextInput::new();
        for c in "кофе".chars() {
            input.insert(c);
        }
        assert_eq!(input.as_str(), "кофе");
        assert_eq!(input.cursor(), 4);

        input.backspace();
        assert_eq!(input.as_str(), "коф");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        input.set("сайт");
        input.home();
        input.right();
        input.insert('!');
        assert_eq!(input.as_str(), "с!айт");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::new();
        input.set("ab");
        input.delete();
        assert_eq!(input.as_str(), "ab");

        input.home();
        input.delete();
        assert_eq!(input.as_str(), "b");
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut input = TextInput::new();
        input.left();
        assert_eq!(input.cursor(), 0);

        input.set("x");
        input.right();
        input.right();
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_blank_detection() {
        let mut input = TextInput::new();
        assert!(input.is_blank());
        input.set("  \t ");
        assert!(input.is_blank());
        input.set(" a ");
        assert!(!input.is_blank());
        input.clear();
        assert_eq!(input.cursor(), 0);
        assert!(input.as_str().is_empty());
    }
}
