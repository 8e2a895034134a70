//! In-place cell editing state
//!
//! The caret is a character index into `text`, not a byte index.

use super::store::CellPosition;

/// State of the single-cell editor overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    /// Cell being edited
    pub position: CellPosition,
    /// Current buffer contents
    pub text: String,
    /// Caret position in characters
    pub caret: usize,
    /// Value of the cell when editing started
    pub original: String,
    /// First visible character when the text is wider than the cell
    pub scroll_x: usize,
}

impl EditSession {
    /// Start editing with the current cell value, caret at the end
    pub fn new(position: CellPosition, value: &str) -> Self {
        Self {
            position,
            text: value.to_string(),
            caret: value.chars().count(),
            original: value.to_string(),
            scroll_x: 0,
        }
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the caret
    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.text.insert(at, ch);
        self.caret += 1;
    }

    /// Insert text at the caret. Line breaks are dropped since a cell is a
    /// single line.
    pub fn insert_text(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        let at = self.byte_offset(self.caret);
        self.text.insert_str(at, &clean);
        self.caret += clean.chars().count();
    }

    /// Backspace
    pub fn delete_backward(&mut self) {
        if self.caret == 0 {
            return;
        }
        let at = self.byte_offset(self.caret - 1);
        self.text.remove(at);
        self.caret -= 1;
    }

    /// Delete
    pub fn delete_forward(&mut self) {
        if self.caret >= self.char_len() {
            return;
        }
        let at = self.byte_offset(self.caret);
        self.text.remove(at);
    }

    pub fn cursor_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn cursor_home(&mut self) {
        self.caret = 0;
    }

    pub fn cursor_end(&mut self) {
        self.caret = self.char_len();
    }

    /// Whether the buffer differs from the original cell value
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Keep the caret inside a field `visible_chars` wide
    pub fn ensure_caret_visible(&mut self, visible_chars: usize) {
        let visible = visible_chars.max(1);
        if self.caret < self.scroll_x {
            self.scroll_x = self.caret;
        } else if self.caret >= self.scroll_x + visible {
            self.scroll_x = self.caret + 1 - visible;
        }
    }
}
