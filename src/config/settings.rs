// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Application settings
//!
//! Settings are read once at startup from an optional TOML file. Nyra
//! never writes this file back: wizard selections stay in view state, so
//! the configuration surface is strictly read-only.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::tui::state::wizard::{SetupSelections, DEFAULT_DATA_DIR, DEFAULT_INSTALL_DIR};

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub setup: SetupConfig,
}

/// Placeholder-assistant tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Delay before the canned reply, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1000
}

/// Defaults offered when the setup wizard opens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    #[serde(default = "default_install_dir")]
    pub install_dir: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_telemetry")]
    pub telemetry_enabled: bool,
    #[serde(default)]
    pub auto_start_enabled: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            install_dir: default_install_dir(),
            data_dir: default_data_dir(),
            telemetry_enabled: default_telemetry(),
            auto_start_enabled: false,
        }
    }
}

fn default_install_dir() -> String {
    DEFAULT_INSTALL_DIR.to_string()
}

fn default_data_dir() -> String {
    DEFAULT_DATA_DIR.to_string()
}

fn default_telemetry() -> bool {
    true
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Default settings file location (`~/.config/nyra/settings.toml`)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nyra").join("settings.toml"))
    }

    /// Reply delay as a [`Duration`]
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.assistant.reply_delay_ms)
    }

    /// Selections seeded into a fresh wizard
    pub fn initial_selections(&self) -> SetupSelections {
        SetupSelections {
            install_dir: self.setup.install_dir.clone(),
            data_dir: self.setup.data_dir.clone(),
            telemetry_enabled: self.setup.telemetry_enabled,
            auto_start_enabled: self.setup.auto_start_enabled,
        }
    }
}
