// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Host bridge
//!
//! Read-only facts about the machine Nyra is running on, surfaced to the
//! UI (welcome footer, chat status bar) and the `nyra info` command.
//! This is the whole bridge: two property groups, no commands, no events.

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Read-only host properties
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    /// Host operating-system identifier, e.g. "linux" or "macos"
    pub platform: String,
    /// CPU architecture, e.g. "x86_64"
    pub arch: String,
    /// Human-readable OS version, when the system exposes one
    pub os_version: Option<String>,
    /// Nyra's own version
    pub app_version: String,
}

impl HostInfo {
    /// Gather host properties once at startup
    pub fn detect() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            os_version: System::long_os_version(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Short footer line for the welcome screen
    pub fn footer_line(&self) -> String {
        format!(
            "Nyra v{} \u{2022} Based on Leon AI \u{2022} {}",
            self.app_version, self.platform
        )
    }
}
