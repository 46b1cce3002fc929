// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Card widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tui::theme::Variant;

/// Bordered panel with a title, an optional description line, and body text
pub struct Card<'a> {
    title: &'a str,
    description: Option<&'a str>,
    body: Text<'a>,
    variant: Variant,
}

impl<'a> Card<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            body: Text::default(),
            variant: Variant::Outline,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn body(mut self, body: impl Into<Text<'a>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

impl<'a> Widget for Card<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        let bundle = self.variant.bundle();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(bundle.border)
            .title(format!(" {} ", self.title))
            .title_style(bundle.base.bold());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let mut body_area = inner;
        if let Some(description) = self.description {
            buf.set_string(
                inner.x,
                inner.y,
                description,
                Style::default().fg(Color::DarkGray),
            );
            body_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: inner.height.saturating_sub(1),
            };
        }

        if body_area.height > 0 {
            Paragraph::new(self.body)
                .wrap(Wrap { trim: false })
                .render(body_area, buf);
        }
    }
}
