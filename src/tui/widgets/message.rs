// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Message rendering widget

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::tui::state::{message_height, Author, ChatMessage};

use super::Avatar;

/// Widget for rendering a single transcript message
pub struct MessageWidget<'a> {
    message: &'a ChatMessage,
}

impl<'a> MessageWidget<'a> {
    pub fn new(message: &'a ChatMessage) -> Self {
        Self { message }
    }

    /// Height needed at the given width, including header and spacer
    pub fn height(&self, width: u16) -> u16 {
        message_height(self.message, width)
    }
}

impl<'a> Widget for MessageWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 {
            return;
        }

        let (role_style, content_style) = match self.message.author {
            Author::User => (
                Style::default().fg(Color::Cyan).bold(),
                Style::default().fg(Color::Cyan),
            ),
            Author::Assistant => (
                Style::default().fg(Color::White).bold(),
                Style::default().fg(Color::White),
            ),
        };

        let badge = Avatar::for_author(self.message.author);
        let header = Line::from(vec![
            Span::styled(badge.text(), badge_style(self.message.author)),
            Span::styled(format!(" {}", self.message.author.label()), role_style),
            Span::styled(
                format!("  {}", self.message.sent_at.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        buf.set_line(area.x, area.y, &header, area.width);

        let content_area = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };

        Paragraph::new(self.message.text.as_str())
            .style(content_style)
            .wrap(Wrap { trim: false })
            .render(content_area, buf);
    }
}

fn badge_style(author: Author) -> Style {
    match author {
        Author::Assistant => Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        Author::User => Style::default().fg(Color::Black).bg(Color::Gray),
    }
}

/// Render the transcript with scrolling support
///
/// Messages wholly above the viewport are skipped; the first partially
/// visible message is rendered from its top into the remaining space.
pub fn render_messages(
    messages: &[ChatMessage],
    area: Rect,
    buf: &mut Buffer,
    scroll_offset: usize,
) {
    if messages.is_empty() {
        return;
    }

    let mut current_y = area.y;
    let mut lines_skipped = 0usize;
    let viewport_end = area.y + area.height;

    for message in messages {
        if current_y >= viewport_end {
            break;
        }

        let msg_height = message_height(message, area.width);

        // Skip messages entirely above the viewport
        if lines_skipped + msg_height as usize <= scroll_offset {
            lines_skipped += msg_height as usize;
            continue;
        }

        let clip_top = scroll_offset.saturating_sub(lines_skipped) as u16;
        lines_skipped += msg_height as usize;

        let remaining = viewport_end.saturating_sub(current_y);
        let visible = msg_height.saturating_sub(clip_top).min(remaining);
        if visible == 0 {
            continue;
        }

        let msg_area = Rect {
            x: area.x,
            y: current_y,
            width: area.width,
            height: visible,
        };
        MessageWidget::new(message).render(msg_area, buf);
        current_y += visible;
    }
}
