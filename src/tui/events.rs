// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Event system for the TUI
//!
//! Events let timer tasks communicate with the UI without blocking it.
//! Uses tokio mpsc channels for thread-safe messaging.

use tokio::sync::mpsc;

/// Events delivered to the UI loop from async tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A scheduled assistant reply is due
    AssistantReply(String),
    /// Request to redraw the UI
    Refresh,
}

/// Type alias for the event sender
pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Type alias for the event receiver
pub type EventReceiver = mpsc::UnboundedReceiver<AppEvent>;

/// Create a new event channel
pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Helper for sending events, ignoring errors if the receiver is dropped
pub fn send_event(tx: &EventSender, event: AppEvent) {
    let _ = tx.send(event);
}
