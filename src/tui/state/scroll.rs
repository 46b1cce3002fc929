// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Scroll state for the chat message region

use super::transcript::ChatMessage;

/// Scroll position and viewport for the message area
///
/// Auto-follow keeps the view pinned to the newest message until the user
/// scrolls up; scrolling back to the bottom re-engages it.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll position in lines from the top
    pub scroll_offset: usize,
    /// Height of the viewport in lines
    pub viewport_height: u16,
    /// Whether auto-follow is engaged
    pub follow_enabled: bool,
    /// Cached total content height in lines
    cached_total_height: Option<usize>,
    /// Width used for the last height calculation
    cached_width: Option<u16>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            viewport_height: 20,
            follow_enabled: true,
            cached_total_height: None,
            cached_width: None,
        }
    }

    /// Update the viewport height (called when the terminal is resized)
    pub fn update_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    /// Total height of all messages at the given width, with wrapping
    pub fn total_height(&mut self, messages: &[ChatMessage], width: u16) -> usize {
        if let (Some(cached_height), Some(cached_width)) =
            (self.cached_total_height, self.cached_width)
        {
            if cached_width == width {
                return cached_height;
            }
        }

        let total: usize = messages
            .iter()
            .map(|message| message_height(message, width) as usize)
            .sum();

        self.cached_total_height = Some(total);
        self.cached_width = Some(width);
        total
    }

    /// Scroll up by the given number of lines, disengaging auto-follow
    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        if lines > 0 {
            self.follow_enabled = false;
        }
    }

    /// Scroll down; reaching the bottom re-engages auto-follow
    pub fn scroll_down(&mut self, lines: usize, total_height: usize) {
        let max_offset = total_height.saturating_sub(self.viewport_height as usize);
        self.scroll_offset = (self.scroll_offset + lines).min(max_offset);
        if self.scroll_offset >= max_offset {
            self.follow_enabled = true;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.follow_enabled = false;
    }

    pub fn scroll_to_bottom(&mut self, total_height: usize) {
        self.scroll_offset = total_height.saturating_sub(self.viewport_height as usize);
        self.follow_enabled = true;
    }

    /// Snap to the bottom when auto-follow is engaged
    pub fn maybe_follow(&mut self, total_height: usize) {
        if self.follow_enabled {
            self.scroll_offset = total_height.saturating_sub(self.viewport_height as usize);
        }
    }

    pub fn page_up(&mut self) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_up(page);
    }

    pub fn page_down(&mut self, total_height: usize) {
        let page = (self.viewport_height / 2).max(1) as usize;
        self.scroll_down(page, total_height);
    }

    pub fn is_at_top(&self) -> bool {
        self.scroll_offset == 0
    }

    pub fn is_at_bottom(&self, total_height: usize) -> bool {
        let max_offset = total_height.saturating_sub(self.viewport_height as usize);
        self.scroll_offset >= max_offset
    }

    /// Invalidate the height cache (call when messages change)
    pub fn invalidate_cache(&mut self) {
        self.cached_total_height = None;
        self.cached_width = None;
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Height of one rendered message: header line, wrapped content, one
/// spacer line.
pub fn message_height(message: &ChatMessage, width: u16) -> u16 {
    let content_width = width.saturating_sub(4).max(1);

    let content_height: usize = if message.text.is_empty() {
        1
    } else {
        message
            .text
            .lines()
            .map(|line| {
                let chars = line.chars().count();
                if chars == 0 {
                    1
                } else {
                    (chars - 1) / content_width as usize + 1
                }
            })
            .sum::<usize>()
            .max(1)
    };

    (1 + content_height + 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Transcript;

    #[test]
    fn test_scroll_state_new() {
        let state = ScrollState::new();
        assert_eq!(state.scroll_offset, 0);
        assert!(state.follow_enabled);
    }

    #[test]
    fn test_scroll_up_disengages_follow() {
        let mut state = ScrollState::new();
        state.scroll_offset = 10;

        state.scroll_up(3);
        assert_eq!(state.scroll_offset, 7);
        assert!(!state.follow_enabled);

        state.scroll_up(10);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_down_to_bottom_reengages_follow() {
        let mut state = ScrollState::new();
        state.follow_enabled = false;
        let total_height = 50;

        state.scroll_down(5, total_height);
        assert_eq!(state.scroll_offset, 5);
        assert!(!state.follow_enabled);

        state.scroll_down(100, total_height);
        let max_offset = total_height - state.viewport_height as usize;
        assert_eq!(state.scroll_offset, max_offset);
        assert!(state.follow_enabled);
    }

    #[test]
    fn test_maybe_follow() {
        let mut state = ScrollState::new();
        let total_height = 50;

        state.maybe_follow(total_height);
        assert_eq!(
            state.scroll_offset,
            total_height - state.viewport_height as usize
        );

        state.follow_enabled = false;
        state.scroll_offset = 5;
        state.maybe_follow(total_height);
        assert_eq!(state.scroll_offset, 5);
    }

    #[test]
    fn test_scroll_to_top_and_bottom() {
        let mut state = ScrollState::new();
        let total_height = 50;

        state.scroll_to_bottom(total_height);
        assert!(state.is_at_bottom(total_height));
        assert!(state.follow_enabled);

        state.scroll_to_top();
        assert!(state.is_at_top());
        assert!(!state.follow_enabled);
    }

    #[test]
    fn test_page_navigation() {
        let mut state = ScrollState::new();
        state.viewport_height = 20;
        let total_height = 100;

        state.page_down(total_height);
        assert_eq!(state.scroll_offset, 10);

        state.page_up();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_total_height_caches_by_width() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.push_assistant("hi there");

        let mut state = ScrollState::new();
        let first = state.total_height(transcript.messages(), 80);
        let second = state.total_height(transcript.messages(), 80);
        assert_eq!(first, second);

        // Narrower viewport wraps more
        let narrow = state.total_height(transcript.messages(), 10);
        assert!(narrow >= first);
    }

    #[test]
    fn test_invalidate_cache() {
        let mut state = ScrollState::new();
        state.cached_total_height = Some(100);
        state.cached_width = Some(80);

        state.invalidate_cache();
        assert!(state.cached_total_height.is_none());
        assert!(state.cached_width.is_none());
    }

    #[test]
    fn test_message_height_wraps() {
        let mut transcript = Transcript::new();
        transcript.push_user("aaaaaaaaaaaaaaaaaaaa"); // 20 chars

        let message = transcript.last().unwrap();
        // Width 14 leaves 10 content columns: 2 wrapped lines + header + spacer
        assert_eq!(message_height(message, 14), 4);
        // Wide enough for a single line
        assert_eq!(message_height(message, 80), 3);
    }

    #[test]
    fn test_message_height_multiline() {
        let mut transcript = Transcript::new();
        transcript.push_user("one\ntwo\nthree");

        let message = transcript.last().unwrap();
        assert_eq!(message_height(message, 80), 5);
    }
}
