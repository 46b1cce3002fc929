// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Button widget

use ratatui::{
    prelude::*,
    widgets::{Block, Borders},
};

use crate::tui::theme::{Size, Variant};

/// A focusable action label
///
/// Small buttons render as a single `[ label ]` row; medium and large
/// buttons draw a bordered box in the variant's border style.
pub struct Button<'a> {
    label: &'a str,
    variant: Variant,
    size: Size,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: Variant::Default,
            size: Size::Medium,
            focused: false,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height this button needs at its configured size
    pub fn height(&self) -> u16 {
        self.size.height()
    }

    fn style(&self) -> Style {
        let bundle = self.variant.bundle();
        if self.focused {
            bundle.focused
        } else {
            bundle.base
        }
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let style = self.style();
        let pad = " ".repeat(self.size.padding() as usize);

        if self.size == Size::Small || area.height < 3 {
            let text = format!("[{pad}{}{pad}]", self.label);
            buf.set_string(area.x, area.y, &text, style);
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.variant.bundle().border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let text = format!("{pad}{}{pad}", self.label);
        let x = inner.x + inner.width.saturating_sub(text.len() as u16) / 2;
        let y = inner.y + inner.height / 2;
        buf.set_string(x, y, &text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_button_defaults() {
        let button = Button::new("OK");
        assert_eq!(button.variant, Variant::Default);
        assert_eq!(button.size, Size::Medium);
        assert!(!button.focused);
    }

    #[test]
    fn test_button_builders() {
        let button = Button::new("Delete")
            .variant(Variant::Destructive)
            .size(Size::Large)
            .focused(true);
        assert_eq!(button.variant, Variant::Destructive);
        assert_eq!(button.size, Size::Large);
        assert!(button.focused);
        assert_eq!(button.height(), Size::Large.height());
    }

    #[test]
    fn test_focus_changes_style() {
        let resting = Button::new("Next").style();
        let focused = Button::new("Next").focused(true).style();
        assert_ne!(resting, focused);
    }

    #[test]
    fn test_small_button_renders_bracketed_label() {
        let backend = TestBackend::new(20, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let button = Button::new("Next").size(Size::Small);
                f.render_widget(button, f.area());
            })
            .unwrap();

        let row: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .take(20)
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(row.contains("Next"));
        assert!(row.contains('['));
    }

    #[test]
    fn test_medium_button_renders_border() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let button = Button::new("Get Started").variant(Variant::Outline);
                f.render_widget(button, f.area());
            })
            .unwrap();
    }

    #[test]
    fn test_button_tiny_area_does_not_panic() {
        let backend = TestBackend::new(2, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let button = Button::new("Very Long Label Indeed");
                f.render_widget(button, f.area());
            })
            .unwrap();
    }
}
