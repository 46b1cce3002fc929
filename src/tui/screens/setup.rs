// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Setup wizard screen
//!
//! Three panels over the wizard state machine: install location, data
//! location, preferences. The directory panels edit through a shared
//! input field that is synced into the selections whenever the wizard
//! moves; the preferences panel is a two-tab toggle group.

use ratatui::prelude::*;

use crate::tui::state::{
    AdvanceOutcome, InputState, PrefsTab, RetreatOutcome, SetupSelections, Wizard, WizardStep,
};
use crate::tui::theme::Variant;
use crate::tui::widgets::{Card, InputArea, ProgressBar, TabBar};

/// What a key press did to the wizard, as seen by the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupAction {
    /// Still inside the wizard
    Stay,
    /// Wizard finished; selections are handed back to be discarded
    Completed(SetupSelections),
    /// User backed out of the first step
    ExitToWelcome,
}

/// Wizard state plus the live field editor
#[derive(Debug, Clone)]
pub struct SetupScreen {
    pub wizard: Wizard,
    /// Editor for the current step's directory field
    pub field: InputState,
}

impl SetupScreen {
    pub fn new(selections: SetupSelections) -> Self {
        let mut screen = Self {
            wizard: Wizard::new(selections),
            field: InputState::new(),
        };
        screen.load_field();
        screen
    }

    /// Load the current step's value into the field editor
    fn load_field(&mut self) {
        let text = match self.wizard.step() {
            WizardStep::Install => self.wizard.selections.install_dir.clone(),
            WizardStep::Data => self.wizard.selections.data_dir.clone(),
            WizardStep::Preferences => String::new(),
        };
        self.field = InputState::with_text(text);
    }

    /// Store the field editor back into the selections
    fn store_field(&mut self) {
        match self.wizard.step() {
            WizardStep::Install => {
                self.wizard.selections.install_dir = self.field.text().to_string();
            }
            WizardStep::Data => {
                self.wizard.selections.data_dir = self.field.text().to_string();
            }
            WizardStep::Preferences => {}
        }
    }

    /// Move forward; empty fields are accepted without complaint
    pub fn next(&mut self) -> SetupAction {
        self.store_field();
        match self.wizard.advance() {
            AdvanceOutcome::Advanced(_) => {
                self.load_field();
                SetupAction::Stay
            }
            AdvanceOutcome::Completed => {
                SetupAction::Completed(self.wizard.selections.clone())
            }
        }
    }

    /// Move backward, or leave the wizard from the first step
    pub fn back(&mut self) -> SetupAction {
        self.store_field();
        match self.wizard.retreat() {
            RetreatOutcome::Retreated(_) => {
                self.load_field();
                SetupAction::Stay
            }
            RetreatOutcome::ExitToWelcome => SetupAction::ExitToWelcome,
        }
    }

    /// Mocked folder picker for the current directory step
    pub fn browse(&mut self) {
        self.wizard.browse_current();
        self.load_field();
    }

    /// Toggle the boolean on the visible preferences tab
    pub fn toggle_current_pref(&mut self) {
        if self.wizard.step() != WizardStep::Preferences {
            return;
        }
        match self.wizard.prefs_tab {
            PrefsTab::General => self.wizard.toggle_auto_start(),
            PrefsTab::Privacy => self.wizard.toggle_telemetry(),
        }
    }

    /// Render the wizard into the full frame area
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // header
            Constraint::Length(2), // progress
            Constraint::Min(8),    // step panel
            Constraint::Length(1), // hints
        ])
        .split(area);

        self.render_header(f, chunks[0]);
        self.render_progress(f, chunks[1]);

        let panel = inset(chunks[2], 2);
        match self.wizard.step() {
            WizardStep::Install => self.render_directory_step(
                f,
                panel,
                " Installation Directory ",
                &[
                    "Minimum 2GB free disk space",
                    "Administrator privileges may be required",
                    "Internet connection for initial setup",
                ],
            ),
            WizardStep::Data => self.render_directory_step(
                f,
                panel,
                " Data Directory ",
                &[
                    "Local storage: all data stays on your device",
                    "Automatic backup: regular backups ensure your data is never lost",
                ],
            ),
            WizardStep::Preferences => self.render_preferences_step(f, panel),
        }

        self.render_hints(f, chunks[3]);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let step = self.wizard.step();
        let title = Line::from(Span::styled(
            "Setup Nyra",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .centered();
        let subtitle = Line::from(vec![
            Span::styled(step.title(), Style::default().fg(Color::White).bold()),
            Span::styled(
                format!(" \u{2022} {}", step.description()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .centered();

        f.render_widget(title, Rect { height: 1, ..area });
        f.render_widget(
            subtitle,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let step = self.wizard.step();
        let bar = ProgressBar::new(self.wizard.progress());
        let label = format!(
            "Step {} of {} \u{2022} {}% Complete",
            step.position(),
            WizardStep::count(),
            bar.percent()
        );
        f.render_widget(bar.label(label), inset(area, 2));
    }

    fn render_directory_step(&self, f: &mut Frame, area: Rect, label: &str, notes: &[&str]) {
        let chunks = Layout::vertical([
            Constraint::Length(3), // field
            Constraint::Length(1), // gap
            Constraint::Min(4),    // notes card
        ])
        .split(area);

        let field = InputArea::new(&self.field).title(label).focused(true);
        let (cursor_x, cursor_y) = field.cursor_position(chunks[0]);
        f.render_widget(field, chunks[0]);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));

        let body: Vec<Line> = notes
            .iter()
            .map(|note| Line::from(format!("\u{2022} {note}")))
            .collect();
        let card_title = match self.wizard.step() {
            WizardStep::Install => "Installation Requirements",
            _ => "Data Storage",
        };
        f.render_widget(
            Card::new(card_title)
                .variant(Variant::Ghost)
                .body(Text::from(body)),
            chunks[2],
        );
    }

    fn render_preferences_step(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // gap
            Constraint::Length(5), // toggle card
            Constraint::Min(0),    // ready note
        ])
        .split(area);

        let selected = match self.wizard.prefs_tab {
            PrefsTab::General => 0,
            PrefsTab::Privacy => 1,
        };
        let labels = PrefsTab::all().iter().map(|tab| tab.label()).collect();
        f.render_widget(TabBar::new(labels).select(selected), chunks[0]);

        let (title, blurb, enabled) = match self.wizard.prefs_tab {
            PrefsTab::General => (
                "Auto-start with system",
                "Launch Nyra automatically when you start your computer",
                self.wizard.selections.auto_start_enabled,
            ),
            PrefsTab::Privacy => (
                "Anonymous telemetry",
                "Help improve Nyra by sharing anonymous usage data",
                self.wizard.selections.telemetry_enabled,
            ),
        };

        let state_span = if enabled {
            Span::styled("Enabled", Style::default().fg(Color::Green).bold())
        } else {
            Span::styled("Disabled", Style::default().fg(Color::DarkGray))
        };
        let body = Text::from(vec![
            Line::from(blurb),
            Line::default(),
            Line::from(vec![Span::raw("State: "), state_span]),
        ]);
        f.render_widget(Card::new(title).body(body), chunks[2]);

        if chunks[3].height >= 3 {
            f.render_widget(
                Card::new("Ready to Launch!")
                    .variant(Variant::Ghost)
                    .body(
                        "Nyra is configured and ready to be your intelligent AI assistant. \
                         Press Enter to complete setup.",
                    ),
                chunks[3],
            );
        }
    }

    fn render_hints(&self, f: &mut Frame, area: Rect) {
        let hints = match self.wizard.step() {
            WizardStep::Preferences => {
                "Tab switch tab │ Space toggle │ Enter complete setup │ Esc previous"
            }
            WizardStep::Install => "Ctrl+O browse │ Enter next │ Esc back to welcome",
            WizardStep::Data => "Ctrl+O browse │ Enter next │ Esc previous",
        };
        f.render_widget(
            Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))).centered(),
            area,
        );
    }
}

/// Shrink an area horizontally by the given margin on both sides
fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}
