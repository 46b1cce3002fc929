// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Terminal user interface
//!
//! Screen router and event loop for the three screens (welcome, setup,
//! chat), plus the visual primitives they are composed from.

pub mod app;
pub mod events;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::error::{NyraError, Result};
use crate::host::HostInfo;

pub use app::{App, Screen, TickResult};
pub use events::{AppEvent, EventSender};

/// Where the shell should start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartScreen {
    Welcome,
    Setup,
    Chat,
}

/// Run the TUI until the user quits
pub async fn run(settings: Settings, host: HostInfo, start: StartScreen) -> Result<()> {
    // Setup terminal with a panic hook that restores it on crash
    let original_panic_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_panic_hook(panic_info);
    }));

    enable_raw_mode().map_err(|e| NyraError::Tui(e.to_string()))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| NyraError::Tui(e.to_string()))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| NyraError::Tui(e.to_string()))?;

    let mut app = match start {
        StartScreen::Welcome => App::new(settings, host),
        StartScreen::Setup => App::new_at_setup(settings, host),
        StartScreen::Chat => App::new_at_chat(settings, host),
    };

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    let _ = std::panic::take_hook();

    disable_raw_mode().map_err(|e| NyraError::Tui(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| NyraError::Tui(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| NyraError::Tui(e.to_string()))?;

    result
}

/// Main application loop
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| NyraError::Tui(e.to_string()))?;

        match app.tick().await? {
            TickResult::Continue => {}
            TickResult::Quit => return Ok(()),
        }
    }
}
