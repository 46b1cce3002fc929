// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Placeholder assistant
//!
//! Nyra's shell currently ships without a model backend: the assistant
//! greets once and answers every message with the same reply after a
//! fixed delay. The scheduler below owns one tokio task per pending
//! reply so that tearing down the chat screen aborts anything still
//! waiting, instead of letting a timer fire into a view that no longer
//! exists.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::tui::events::{send_event, AppEvent, EventSender};

/// Greeting seeded into a fresh transcript
pub const GREETING: &str = "Hello! I'm Nyra, your AI assistant. How can I help you today?";

/// The one reply the placeholder assistant knows
pub const CANNED_REPLY: &str = "I understand your request. As an AI assistant based on Leon AI, \
     I'm here to help you with various tasks. What would you like to explore?";

/// Delay before a scheduled reply is delivered
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// Schedules delayed canned replies and owns their tasks
///
/// Every `schedule` call spawns an independent timer; sends are never
/// debounced or coalesced. Replies are delivered through the UI event
/// channel in scheduling order since all timers share the same delay.
#[derive(Debug)]
pub struct ReplyScheduler {
    tx: EventSender,
    delay: Duration,
    pending: Vec<JoinHandle<()>>,
}

impl ReplyScheduler {
    pub fn new(tx: EventSender) -> Self {
        Self::with_delay(tx, REPLY_DELAY)
    }

    /// Override the delay (tests use a short or paused clock)
    pub fn with_delay(tx: EventSender, delay: Duration) -> Self {
        Self {
            tx,
            delay,
            pending: Vec::new(),
        }
    }

    /// Schedule one canned reply after the configured delay
    pub fn schedule(&mut self) {
        self.reap_finished();

        let tx = self.tx.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            send_event(&tx, AppEvent::AssistantReply(CANNED_REPLY.to_string()));
        });
        self.pending.push(handle);
        debug!(pending = self.pending.len(), "scheduled assistant reply");
    }

    /// Number of replies still waiting on their timer
    pub fn pending_count(&mut self) -> usize {
        self.reap_finished();
        self.pending.len()
    }

    /// Abort every outstanding reply task
    pub fn cancel_all(&mut self) {
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }

    fn reap_finished(&mut self) {
        self.pending.retain(|handle| !handle.is_finished());
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
