// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat status bar widget

use ratatui::prelude::*;

/// One-line header bar for the chat screen
///
/// Left side carries the assistant identity and availability, right side
/// the host platform plus transient indicators (mic, queued replies).
pub struct StatusBar<'a> {
    platform: &'a str,
    listening: bool,
    pending_replies: usize,
}

impl<'a> StatusBar<'a> {
    pub fn new(platform: &'a str) -> Self {
        Self {
            platform,
            listening: false,
            pending_replies: 0,
        }
    }

    pub fn listening(mut self, listening: bool) -> Self {
        self.listening = listening;
        self
    }

    pub fn pending_replies(mut self, count: usize) -> Self {
        self.pending_replies = count;
        self
    }

    fn right_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.listening {
            parts.push("mic on".to_string());
        }
        if self.pending_replies > 0 {
            parts.push(format!("{} queued", self.pending_replies));
        }
        parts.push(self.platform.to_string());
        parts.join(" │ ")
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        buf.set_style(area, Style::default().bg(Color::Black));

        let left = Line::from(vec![
            Span::styled(" Nyra Assistant", Style::default().fg(Color::Cyan).bold()),
            Span::styled("  Online", Style::default().fg(Color::Green)),
            Span::styled(
                " \u{2022} Ready to help",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        buf.set_line(area.x, area.y, &left, area.width);

        let right = self.right_text();
        let right_width = right.chars().count() as u16 + 1;
        if area.width > right_width + 20 {
            buf.set_string(
                area.x + area.width - right_width,
                area.y,
                &right,
                Style::default().fg(Color::DarkGray),
            );
        }
    }
}
