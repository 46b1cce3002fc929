// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Nyra - a chat-assistant shell for the terminal.
//!
//! This crate is the presentation layer only: three screens (welcome,
//! setup wizard, chat) composed from reusable widgets, driven by a small
//! event loop. There is no model backend and no persistence; the
//! assistant is a fixed delayed reply and all setup selections live in
//! view state.
//!
//! Architecture highlights:
//! - `tui`: screen router, event loop, per-screen state, widgets
//! - `assistant`: the placeholder reply engine and its scheduler
//! - `host`: read-only host facts surfaced to the UI and CLI
//! - `config`: read-only settings (reply delay, wizard defaults)

pub mod assistant;
pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod tui;

pub use error::{NyraError, Result};
