// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Transcript state for the chat screen
//!
//! The transcript is an append-only, in-memory list of messages. It lives
//! exactly as long as the chat screen; nothing here touches disk.

use chrono::{DateTime, Utc};

/// Safely truncate a string at a character boundary, appending "..." if truncated.
/// This avoids panics when slicing multi-byte UTF-8 characters.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Author of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl Author {
    pub fn label(&self) -> &'static str {
        match self {
            Author::User => "you",
            Author::Assistant => "nyra",
        }
    }
}

/// A single chat message
///
/// Ids are assigned by the owning [`Transcript`] and are strictly
/// increasing within a session. Messages are never mutated or removed.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub author: Author,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Ordered, append-only message list owned by the chat screen
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message and return its id
    pub fn push_user(&mut self, text: impl Into<String>) -> u64 {
        self.push(Author::User, text.into())
    }

    /// Append an assistant message and return its id
    pub fn push_assistant(&mut self, text: impl Into<String>) -> u64 {
        self.push(Author::Assistant, text.into())
    }

    fn push(&mut self, author: Author, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            author,
            text,
            sent_at: Utc::now(),
        });
        id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Count messages from the given author
    pub fn count_by(&self, author: Author) -> usize {
        self.messages.iter().filter(|m| m.author == author).count()
    }
}
