// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! State management for the TUI

pub mod input;
pub mod scroll;
pub mod transcript;
pub mod wizard;

pub use input::InputState;
pub use scroll::{message_height, ScrollState};
pub use transcript::{truncate_string, Author, ChatMessage, Transcript};
pub use wizard::{
    AdvanceOutcome, PrefsTab, RetreatOutcome, SetupSelections, Wizard, WizardStep,
};
