// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Top-level rendering dispatch

use ratatui::prelude::*;

use crate::tui::app::{App, Screen};
use crate::tui::screens::welcome;

/// Draw the current screen
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    match &mut app.screen {
        Screen::Welcome => welcome::render(f, area, &app.host),
        Screen::Setup(setup) => setup.render(f, area),
        Screen::Chat(chat) => {
            let platform = app.host.platform.clone();
            chat.render(f, area, &platform);
        }
    }
}
