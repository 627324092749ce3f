/// Single-line text being edited. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub cursor_pos: usize,
}

impl TextInput {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor_pos: value.chars().count(),
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_pos);
        self.value.insert(at, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let at = self.byte_index(self.cursor_pos);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::default();
        for c in "12a".chars() {
            input.insert_char(c);
        }
        input.backspace();
        assert_eq!(input.value, "12");
        assert_eq!(input.cursor_pos, 2);
    }

    #[test]
    fn test_edit_in_the_middle() {
        let mut input = TextInput::new("1500");
        input.move_cursor_home();
        input.move_cursor_right();
        input.insert_char('.');
        assert_eq!(input.value, "1.500");

        input.delete();
        assert_eq!(input.value, "1.00");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = TextInput::new("₹2 Cr");
        input.move_cursor_home();
        input.delete();
        assert_eq!(input.value, "2 Cr");

        input.move_cursor_end();
        input.insert_char('✔');
        assert_eq!(input.value, "2 Cr✔");
        input.backspace();
        assert_eq!(input.value, "2 Cr");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::new("ab");
        input.move_cursor_right();
        assert_eq!(input.cursor_pos, 2);
        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_pos, 0);
        input.backspace();
        assert_eq!(input.value, "ab");
    }
}
