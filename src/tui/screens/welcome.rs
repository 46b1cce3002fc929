// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Welcome screen
//!
//! Static marketing content with a single action: get started, which
//! moves the user into the setup wizard.

use ratatui::prelude::*;

use crate::host::HostInfo;
use crate::tui::theme::{Size, Variant};
use crate::tui::widgets::{Button, Card};

/// Feature blurbs shown under the title
pub const FEATURES: &[(&str, &str)] = &[
    (
        "Intelligent",
        "Advanced AI capabilities powered by Leon's robust engine",
    ),
    (
        "Beautiful",
        "Modern glass-morphism design with smooth animations",
    ),
    (
        "Fast",
        "Native desktop performance with instant responses",
    ),
];

const TAGLINE: &str = "Your intelligent AI assistant, reimagined for the desktop. \
     Experience the power of Leon AI with a beautiful, modern interface \
     designed for productivity and creativity.";

/// Render the welcome screen into the full frame area
pub fn render(f: &mut Frame, area: Rect, host: &HostInfo) {
    let chunks = Layout::vertical([
        Constraint::Length(2), // top margin
        Constraint::Length(2), // title
        Constraint::Length(4), // tagline
        Constraint::Length(6), // feature cards
        Constraint::Length(3), // get started button
        Constraint::Min(0),    // flexible gap
        Constraint::Length(1), // footer
    ])
    .split(area);

    let title = Line::from(Span::styled(
        "Welcome to Nyra",
        Style::default().fg(Color::Cyan).bold(),
    ))
    .centered();
    f.render_widget(title, chunks[1]);

    let tagline = Text::from(TAGLINE);
    let tagline_area = centered_width(chunks[2], 70);
    f.render_widget(
        ratatui::widgets::Paragraph::new(tagline)
            .style(Style::default().fg(Color::Gray))
            .wrap(ratatui::widgets::Wrap { trim: true })
            .centered(),
        tagline_area,
    );

    render_features(f, centered_width(chunks[3], 90));

    let button_area = centered_width(chunks[4], 24);
    f.render_widget(
        Button::new("Get Started \u{2192}")
            .variant(Variant::Default)
            .size(Size::Medium)
            .focused(true),
        button_area,
    );

    let footer = Line::from(Span::styled(
        host.footer_line(),
        Style::default().fg(Color::DarkGray),
    ))
    .centered();
    f.render_widget(footer, chunks[6]);
}

fn render_features(f: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ])
    .split(area);

    for (i, (title, blurb)) in FEATURES.iter().enumerate() {
        f.render_widget(Card::new(title).variant(Variant::Ghost).body(*blurb), columns[i]);
    }
}

/// Center a fixed-width band inside the given area
fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
