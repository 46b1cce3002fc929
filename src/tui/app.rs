// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application state and logic
//!
//! Holds the current screen and routes keyboard input and async events
//! to it. The screen is a closed tagged variant that carries its own
//! state, so there is no such thing as an invalid route and leaving a
//! screen drops its state with it.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;
use uuid::Uuid;

use crate::config::Settings;
use crate::error::Result;
use crate::host::HostInfo;
use crate::tui::events::{create_event_channel, AppEvent, EventReceiver, EventSender};
use crate::tui::screens::{ChatScreen, SetupAction, SetupScreen};
use crate::tui::state::WizardStep;

/// Result of one tick of the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
}

/// Current screen, carrying its own state
#[derive(Debug)]
pub enum Screen {
    /// Static landing page
    Welcome,
    /// Three-step setup wizard
    Setup(SetupScreen),
    /// Chat with the placeholder assistant
    Chat(ChatScreen),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Setup(_) => "setup",
            Screen::Chat(_) => "chat",
        }
    }
}

/// Main application state
pub struct App {
    pub screen: Screen,
    pub session_id: Uuid,
    pub settings: Settings,
    pub host: HostInfo,
    pub should_quit: bool,
    event_tx: EventSender,
    event_rx: EventReceiver,
}

impl App {
    pub fn new(settings: Settings, host: HostInfo) -> Self {
        let (event_tx, event_rx) = create_event_channel();
        Self {
            screen: Screen::Welcome,
            session_id: Uuid::new_v4(),
            settings,
            host,
            should_quit: false,
            event_tx,
            event_rx,
        }
    }

    /// Start at the chat screen directly, skipping welcome and setup
    pub fn new_at_chat(settings: Settings, host: HostInfo) -> Self {
        let mut app = Self::new(settings, host);
        app.enter_chat();
        app
    }

    /// Start at the setup wizard
    pub fn new_at_setup(settings: Settings, host: HostInfo) -> Self {
        let mut app = Self::new(settings, host);
        app.enter_setup();
        app
    }

    /// Get the event sender for passing to async tasks
    pub fn event_sender(&self) -> EventSender {
        self.event_tx.clone()
    }

    /// Process one tick of the event loop
    pub async fn tick(&mut self) -> Result<TickResult> {
        if self.should_quit {
            return Ok(TickResult::Quit);
        }

        // Wait for an async event, with a timeout for smooth UI updates
        tokio::select! {
            Some(event) = self.event_rx.recv() => {
                self.handle_event(event);
                self.drain_events();
            }
            _ = tokio::time::sleep(Duration::from_millis(50)) => {}
        }

        // Check keyboard input (non-blocking)
        if crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                self.handle_key(key);
            }
        }

        Ok(TickResult::Continue)
    }

    /// Apply every event already sitting in the channel
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Handle an async event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply(text) => {
                if let Screen::Chat(chat) = &mut self.screen {
                    chat.apply_reply(text);
                }
            }
            AppEvent::Refresh => {}
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C quits from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match &mut self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::Setup(_) => self.handle_setup_key(key),
            Screen::Chat(_) => self.handle_chat_key(key),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.enter_setup(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        let Screen::Setup(setup) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Enter => match setup.next() {
                SetupAction::Stay => {}
                SetupAction::Completed(selections) => {
                    // Selections are intentionally dropped here: setup
                    // data is never persisted.
                    debug!(
                        install_dir = %selections.install_dir,
                        data_dir = %selections.data_dir,
                        telemetry = selections.telemetry_enabled,
                        auto_start = selections.auto_start_enabled,
                        "setup completed"
                    );
                    self.enter_chat();
                }
                SetupAction::ExitToWelcome => self.enter_welcome(),
            },
            KeyCode::Esc => {
                if setup.back() == SetupAction::ExitToWelcome {
                    self.enter_welcome();
                }
            }
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                setup.browse();
            }
            KeyCode::Tab if setup.wizard.step() == WizardStep::Preferences => {
                setup.wizard.cycle_prefs_tab();
            }
            KeyCode::BackTab if setup.wizard.step() == WizardStep::Preferences => {
                setup.wizard.cycle_prefs_tab();
            }
            KeyCode::Char(' ') if setup.wizard.step() == WizardStep::Preferences => {
                setup.toggle_current_pref();
            }
            KeyCode::Char(c)
                if setup.wizard.step() != WizardStep::Preferences
                    && !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                setup.field.insert_char(c);
            }
            KeyCode::Backspace => setup.field.backspace(),
            KeyCode::Delete => setup.field.delete(),
            KeyCode::Left => setup.field.move_left(),
            KeyCode::Right => setup.field.move_right(),
            KeyCode::Home => setup.field.move_home(),
            KeyCode::End => setup.field.move_end(),
            _ => {}
        }
    }

    fn handle_chat_key(&mut self, key: KeyEvent) {
        let Screen::Chat(chat) = &mut self.screen else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.quit();
            }
            KeyCode::Enter => chat.send_current_input(),
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                chat.toggle_listening();
            }
            KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                chat.toggle_sidebar();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                chat.input.insert_char(c);
            }
            KeyCode::Backspace => chat.input.backspace(),
            KeyCode::Delete => chat.input.delete(),
            KeyCode::Left => chat.input.move_left(),
            KeyCode::Right => chat.input.move_right(),
            KeyCode::Home => chat.input.move_home(),
            KeyCode::End => chat.input.move_end(),
            KeyCode::Up => chat.input.history_prev(),
            KeyCode::Down => chat.input.history_next(),
            KeyCode::PageUp => chat.scroll.page_up(),
            KeyCode::PageDown => {
                // Height is recomputed on the next draw; use the cached
                // viewport for the jump.
                let viewport = chat.scroll.viewport_height as usize;
                let total = chat
                    .scroll
                    .total_height(chat.transcript.messages(), u16::MAX)
                    .max(viewport);
                chat.scroll.page_down(total);
            }
            _ => {}
        }
    }

    fn enter_welcome(&mut self) {
        debug!(from = self.screen.name(), "navigating to welcome");
        self.screen = Screen::Welcome;
    }

    fn enter_setup(&mut self) {
        debug!(from = self.screen.name(), "navigating to setup");
        self.screen = Screen::Setup(SetupScreen::new(self.settings.initial_selections()));
    }

    fn enter_chat(&mut self) {
        debug!(from = self.screen.name(), "navigating to chat");
        self.screen = Screen::Chat(ChatScreen::new(
            self.event_tx.clone(),
            self.settings.reply_delay(),
        ));
    }

    /// Stop the application; the chat screen cancels its pending replies
    /// when it is dropped
    pub fn quit(&mut self) {
        if let Screen::Chat(chat) = &mut self.screen {
            chat.teardown();
        }
        self.should_quit = true;
    }
}
