// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tab group widget

use ratatui::{prelude::*, widgets::Tabs};

use crate::tui::theme::Variant;

/// Single-row tab strip
///
/// The selected index is clamped to the label list, so selection can
/// never point outside the group.
pub struct TabBar<'a> {
    labels: Vec<&'a str>,
    selected: usize,
    variant: Variant,
}

impl<'a> TabBar<'a> {
    pub fn new(labels: Vec<&'a str>) -> Self {
        Self {
            labels,
            selected: 0,
            variant: Variant::Ghost,
        }
    }

    pub fn select(mut self, index: usize) -> Self {
        self.selected = index.min(self.labels.len().saturating_sub(1));
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }
}

impl<'a> Widget for TabBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || self.labels.is_empty() {
            return;
        }

        let bundle = self.variant.bundle();
        Tabs::new(self.labels)
            .select(self.selected)
            .style(bundle.base)
            .highlight_style(bundle.focused)
            .divider(Span::styled("|", Style::default().fg(Color::DarkGray)))
            .render(area, buf);
    }
}
