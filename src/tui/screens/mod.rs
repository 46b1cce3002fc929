// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Screen modules for the TUI
//!
//! Each screen owns its state and rendering; input routing lives in
//! [`crate::tui::app`].

pub mod chat;
pub mod setup;
pub mod welcome;

pub use chat::ChatScreen;
pub use setup::{SetupAction, SetupScreen};
