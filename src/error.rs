// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for Nyra
//!
//! This module defines all error types used throughout the application.

use thiserror::Error;

/// Main error type for Nyra operations
#[derive(Error, Debug)]
pub enum NyraError {
    /// Terminal setup or rendering errors
    #[error("Terminal error: {0}")]
    Tui(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Nyra operations
pub type Result<T> = std::result::Result<T, NyraError>;

impl From<toml::de::Error> for NyraError {
    fn from(err: toml::de::Error) -> Self {
        NyraError::Toml(err.to_string())
    }
}
