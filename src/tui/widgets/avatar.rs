// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Avatar widget

use ratatui::prelude::*;

use crate::tui::state::Author;

/// Two-character identity badge
///
/// Falls back to initials when there is no richer representation, which
/// in a terminal is always.
pub struct Avatar {
    initials: [char; 2],
    style: Style,
}

impl Avatar {
    pub fn new(initials: [char; 2]) -> Self {
        Self {
            initials,
            style: Style::default().fg(Color::Black).bg(Color::Gray),
        }
    }

    /// Badge for a transcript author: "NY" for Nyra, "US" for the user
    pub fn for_author(author: Author) -> Self {
        match author {
            Author::Assistant => Self::new(['N', 'Y'])
                .style(Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
            Author::User => {
                Self::new(['U', 'S']).style(Style::default().fg(Color::Black).bg(Color::Gray))
            }
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The rendered badge text
    pub fn text(&self) -> String {
        format!(" {}{} ", self.initials[0], self.initials[1])
    }
}

impl Widget for Avatar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 4 {
            return;
        }
        buf.set_string(area.x, area.y, self.text(), self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_avatar_text() {
        let avatar = Avatar::new(['N', 'Y']);
        assert_eq!(avatar.text(), " NY ");
    }

    #[test]
    fn test_author_badges_differ() {
        let nyra = Avatar::for_author(Author::Assistant);
        let user = Avatar::for_author(Author::User);
        assert_ne!(nyra.text(), user.text());
        assert_ne!(nyra.style, user.style);
    }

    #[test]
    fn test_avatar_renders() {
        let backend = TestBackend::new(10, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                f.render_widget(Avatar::for_author(Author::Assistant), f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(text.contains("NY"));
    }

    #[test]
    fn test_avatar_narrow_area_does_not_panic() {
        let backend = TestBackend::new(2, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                f.render_widget(Avatar::new(['A', 'B']), f.area());
            })
            .unwrap();
    }
}
