// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Style-variant resolution for the visual primitives
//!
//! Every primitive widget (button, card, tab group, ...) picks its look
//! from a small closed set of variants and sizes. Keeping these as enums
//! means an unknown variant simply cannot reach the render path; names
//! arriving as text (e.g. from a config file) go through `FromStr`, which
//! rejects unrecognized keys instead of defaulting.

use std::str::FromStr;

use ratatui::prelude::*;

use crate::error::NyraError;

/// Appearance variant for a visual primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Solid accent look, used for the primary action
    Default,
    /// Subdued solid look
    Secondary,
    /// Border only, transparent interior
    Outline,
    /// No chrome until focused
    Ghost,
    /// Destructive action look
    Destructive,
}

/// Size preset for a visual primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Medium,
    Large,
}

/// Resolved style bundle for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    /// Style for the primitive's main content
    pub base: Style,
    /// Style applied when the primitive has focus
    pub focused: Style,
    /// Style for the surrounding border, where the primitive draws one
    pub border: Style,
}

impl Variant {
    pub fn all() -> &'static [Variant] {
        &[
            Variant::Default,
            Variant::Secondary,
            Variant::Outline,
            Variant::Ghost,
            Variant::Destructive,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Secondary => "secondary",
            Variant::Outline => "outline",
            Variant::Ghost => "ghost",
            Variant::Destructive => "destructive",
        }
    }

    /// Resolve this variant to its fixed style bundle
    pub fn bundle(&self) -> StyleBundle {
        match self {
            Variant::Default => StyleBundle {
                base: Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
                focused: Style::default().fg(Color::Black).bg(Color::LightCyan).bold(),
                border: Style::default().fg(Color::Cyan),
            },
            Variant::Secondary => StyleBundle {
                base: Style::default().fg(Color::White).bg(Color::DarkGray),
                focused: Style::default().fg(Color::Black).bg(Color::Gray),
                border: Style::default().fg(Color::DarkGray),
            },
            Variant::Outline => StyleBundle {
                base: Style::default().fg(Color::Cyan),
                focused: Style::default().fg(Color::Black).bg(Color::Cyan),
                border: Style::default().fg(Color::Cyan),
            },
            Variant::Ghost => StyleBundle {
                base: Style::default().fg(Color::Gray),
                focused: Style::default().fg(Color::Cyan).bold(),
                border: Style::default().fg(Color::DarkGray),
            },
            Variant::Destructive => StyleBundle {
                base: Style::default().fg(Color::White).bg(Color::Red).bold(),
                focused: Style::default().fg(Color::Black).bg(Color::LightRed).bold(),
                border: Style::default().fg(Color::Red),
            },
        }
    }
}

impl FromStr for Variant {
    type Err = NyraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Variant::Default),
            "secondary" => Ok(Variant::Secondary),
            "outline" => Ok(Variant::Outline),
            "ghost" => Ok(Variant::Ghost),
            "destructive" => Ok(Variant::Destructive),
            other => Err(NyraError::InvalidInput(format!(
                "unknown style variant: {other}"
            ))),
        }
    }
}

impl Size {
    pub fn all() -> &'static [Size] {
        &[Size::Small, Size::Medium, Size::Large]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "sm",
            Size::Medium => "md",
            Size::Large => "lg",
        }
    }

    /// Rendered height in terminal rows, including any border
    pub fn height(&self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 3,
            Size::Large => 5,
        }
    }

    /// Horizontal padding inside the primitive
    pub fn padding(&self) -> u16 {
        match self {
            Size::Small => 1,
            Size::Medium => 2,
            Size::Large => 4,
        }
    }
}

impl FromStr for Size {
    type Err = NyraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(Size::Small),
            "md" => Ok(Size::Medium),
            "lg" => Ok(Size::Large),
            other => Err(NyraError::InvalidInput(format!("unknown size: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_resolves() {
        for variant in Variant::all() {
            let bundle = variant.bundle();
            // Focus must be visually distinct from the resting state
            assert_ne!(bundle.base, bundle.focused, "{}", variant.label());
        }
    }

    #[test]
    fn test_variant_from_str_roundtrip() {
        for variant in Variant::all() {
            let parsed: Variant = variant.label().parse().unwrap();
            assert_eq!(parsed, *variant);
        }
    }

    #[test]
    fn test_variant_from_str_rejects_unknown() {
        let result = "link".parse::<Variant>();
        assert!(matches!(result, Err(NyraError::InvalidInput(_))));
    }

    #[test]
    fn test_variant_from_str_is_case_sensitive() {
        assert!("Default".parse::<Variant>().is_err());
    }

    #[test]
    fn test_size_from_str_roundtrip() {
        for size in Size::all() {
            let parsed: Size = size.label().parse().unwrap();
            assert_eq!(parsed, *size);
        }
    }

    #[test]
    fn test_size_from_str_rejects_unknown() {
        assert!("icon".parse::<Size>().is_err());
    }

    #[test]
    fn test_size_heights_increase() {
        assert!(Size::Small.height() < Size::Medium.height());
        assert!(Size::Medium.height() < Size::Large.height());
    }

    #[test]
    fn test_destructive_reads_red() {
        let bundle = Variant::Destructive.bundle();
        assert_eq!(bundle.border, Style::default().fg(Color::Red));
    }
}
