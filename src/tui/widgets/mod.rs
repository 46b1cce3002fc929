// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Reusable visual primitives
//!
//! Each widget is a thin wrapper around ratatui rendering with its look
//! picked via the closed variant/size enums in [`crate::tui::theme`].

pub mod avatar;
pub mod button;
pub mod card;
pub mod input_area;
pub mod message;
pub mod progress;
pub mod status_bar;
pub mod tabs;

pub use avatar::Avatar;
pub use button::Button;
pub use card::Card;
pub use input_area::{render_input_with_hints, InputArea};
pub use message::{render_messages, MessageWidget};
pub use progress::ProgressBar;
pub use status_bar::StatusBar;
pub use tabs::TabBar;
