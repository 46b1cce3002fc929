// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Progress bar widget

use ratatui::{prelude::*, widgets::Gauge};

use crate::tui::theme::Variant;

/// Horizontal completion bar
pub struct ProgressBar {
    /// Completion in `0.0..=1.0`; out-of-range input is clamped
    ratio: f64,
    label: Option<String>,
    variant: Variant,
}

impl ProgressBar {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio: ratio.clamp(0.0, 1.0),
            label: None,
            variant: Variant::Default,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Percentage for display, rounded like the original shell
    pub fn percent(&self) -> u16 {
        (self.ratio * 100.0).round() as u16
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label = self
            .label
            .clone()
            .unwrap_or_else(|| format!("{}% Complete", self.percent()));

        let bundle = self.variant.bundle();
        Gauge::default()
            .gauge_style(bundle.base)
            .ratio(self.ratio)
            .label(label)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_ratio_clamped() {
        assert_eq!(ProgressBar::new(1.5).ratio(), 1.0);
        assert_eq!(ProgressBar::new(-0.5).ratio(), 0.0);
        assert_eq!(ProgressBar::new(0.5).ratio(), 0.5);
    }

    #[test]
    fn test_percent_rounds() {
        assert_eq!(ProgressBar::new(1.0 / 3.0).percent(), 33);
        assert_eq!(ProgressBar::new(2.0 / 3.0).percent(), 67);
        assert_eq!(ProgressBar::new(1.0).percent(), 100);
    }

    #[test]
    fn test_renders_default_label() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                f.render_widget(ProgressBar::new(2.0 / 3.0), f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(text.contains("67% Complete"));
    }

    #[test]
    fn test_renders_custom_label() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                f.render_widget(ProgressBar::new(0.5).label("Step 2 of 3"), f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect();
        assert!(text.contains("Step 2 of 3"));
    }
}
