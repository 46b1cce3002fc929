// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Text input widget
//!
//! Used for the chat input area (with a `> ` prompt and a busy title)
//! and for the wizard's directory fields (with a label title).

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::state::InputState;

/// Bordered single-line text input
pub struct InputArea<'a> {
    input: &'a InputState,
    focused: bool,
    placeholder: Option<&'a str>,
    title: Option<String>,
    prompt: &'a str,
    busy: bool,
}

impl<'a> InputArea<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self {
            input,
            focused: true,
            placeholder: None,
            title: None,
            prompt: "",
            busy: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn placeholder(mut self, text: &'a str) -> Self {
        self.placeholder = Some(text);
        self
    }

    /// Title drawn into the top border (field label or busy notice)
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Prompt string drawn before the text, e.g. `"> "`
    pub fn prompt(mut self, prompt: &'a str) -> Self {
        self.prompt = prompt;
        self
    }

    /// Busy mode recolors the border while replies are queued
    pub fn busy(mut self, busy: bool) -> Self {
        self.busy = busy;
        self
    }

    /// Cursor position in screen coordinates
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let x = area.x + 1 + self.prompt.len() as u16 + self.input.cursor_column() as u16;
        let y = area.y + 1;
        (
            x.min(area.x + area.width.saturating_sub(1)),
            y.min(area.y + area.height.saturating_sub(1)),
        )
    }
}

impl<'a> Widget for InputArea<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_style, title_style) = if self.busy {
            // Yellow border while replies are queued
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::Yellow).bold(),
            )
        } else if self.focused {
            (
                Style::default().fg(Color::Cyan),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);

        if let Some(ref title) = self.title {
            block = block.title(title.as_str()).title_style(title_style);
        }

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 4 {
            return;
        }

        if !self.prompt.is_empty() {
            buf.set_string(
                inner.x,
                inner.y,
                self.prompt,
                Style::default().fg(Color::Cyan).bold(),
            );
        }

        let text_x = inner.x + self.prompt.len() as u16;
        let text_width = inner.width.saturating_sub(self.prompt.len() as u16);

        if self.input.is_empty() {
            if let Some(placeholder) = self.placeholder {
                buf.set_string(
                    text_x,
                    inner.y,
                    placeholder,
                    Style::default().fg(Color::DarkGray).italic(),
                );
            }
        } else {
            let display: String = self
                .input
                .text()
                .chars()
                .take(text_width as usize)
                .collect();
            buf.set_string(text_x, inner.y, &display, Style::default().fg(Color::White));
        }

        if self.focused {
            let (cursor_x, cursor_y) = self.cursor_position(area);
            if cursor_x < area.x + area.width && cursor_y < area.y + area.height {
                if let Some(cell) = buf.cell_mut(Position::new(cursor_x, cursor_y)) {
                    cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
                }
            }
        }
    }
}

/// Render an input area with a key-hint line below it
pub fn render_input_with_hints(
    area: Rect,
    buf: &mut Buffer,
    widget: InputArea,
    hints: &[(&str, &str)],
) {
    if area.height < 2 {
        return;
    }

    let input_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(1),
    };

    let hints_area = Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    };

    widget.render(input_area, buf);

    let mut x = hints_area.x + 1;
    for (key, desc) in hints {
        if x + (key.len() + desc.len() + 4) as u16 > hints_area.x + hints_area.width {
            break;
        }

        buf.set_string(x, hints_area.y, key, Style::default().fg(Color::Yellow));
        x += key.len() as u16;
        buf.set_string(x, hints_area.y, " ", Style::default());
        x += 1;
        buf.set_string(x, hints_area.y, desc, Style::default().fg(Color::DarkGray));
        x += desc.len() as u16;
        buf.set_string(x, hints_area.y, " │ ", Style::default().fg(Color::DarkGray));
        x += 3;
    }
}
