// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Input state for text entry
//!
//! Single-line buffer with cursor editing and submit history. Shared by
//! the chat input area and the wizard's directory fields.

/// Input state for a text field
#[derive(Debug, Clone)]
pub struct InputState {
    /// Current input buffer
    pub buffer: String,
    /// Cursor position (byte index, kept on a char boundary)
    pub cursor: usize,
    /// History of previous submissions
    pub history: Vec<String>,
    /// Current history index (None = new input, Some(i) = browsing history)
    pub history_index: Option<usize>,
    /// Saved buffer while browsing history
    saved_buffer: Option<String>,
    /// Maximum history entries to keep
    max_history: usize,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
            saved_buffer: None,
            max_history: 100,
        }
    }

    /// Create an input state pre-filled with text, cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut state = Self::new();
        state.set_buffer(text.into());
        state
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True when the buffer contains nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    /// Insert a character at the cursor position
    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor (backspace)
    pub fn backspace(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete the character at the cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// Clear the buffer without touching history
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;
    }

    /// Submit the current input and return it.
    /// Non-blank submissions are added to history, deduplicated against
    /// the most recent entry.
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history_index = None;
        self.saved_buffer = None;

        if !text.trim().is_empty() && self.history.last().map(|s| s.as_str()) != Some(&text) {
            self.history.push(text.clone());
            if self.history.len() > self.max_history {
                self.history.remove(0);
            }
        }

        text
    }

    /// Navigate to the previous history entry
    pub fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }

        match self.history_index {
            None => {
                self.saved_buffer = Some(self.buffer.clone());
                self.history_index = Some(self.history.len() - 1);
                self.buffer = self.history[self.history.len() - 1].clone();
                self.cursor = self.buffer.len();
            }
            Some(0) => {
                // Already at the oldest entry
            }
            Some(i) => {
                self.history_index = Some(i - 1);
                self.buffer = self.history[i - 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    /// Navigate to the next history entry
    pub fn history_next(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i >= self.history.len() - 1 => {
                self.history_index = None;
                if let Some(saved) = self.saved_buffer.take() {
                    self.buffer = saved;
                    self.cursor = self.buffer.len();
                }
            }
            Some(i) => {
                self.history_index = Some(i + 1);
                self.buffer = self.history[i + 1].clone();
                self.cursor = self.buffer.len();
            }
        }
    }

    /// Set the buffer content directly, cursor at the end
    pub fn set_buffer(&mut self, text: String) {
        self.buffer = text;
        self.cursor = self.buffer.len();
        self.history_index = None;
    }

    /// Cursor position in display columns (char count before the cursor)
    pub fn cursor_column(&self) -> usize {
        self.buffer[..self.cursor].chars().count()
    }
}
