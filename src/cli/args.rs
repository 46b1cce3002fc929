// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nyra - your AI assistant, reimagined for the terminal
#[derive(Parser, Debug)]
#[command(name = "nyra", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging (written to the log file, not the screen)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use an alternate settings file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Open the chat screen directly, skipping welcome and setup
    Chat,
    /// Run the setup wizard
    Setup,
    /// Print host information as JSON
    Info,
}
