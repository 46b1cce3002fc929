// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Nyra - your AI assistant for the terminal
//!
//! Entry point for the Nyra application.

use std::fs::OpenOptions;
use std::sync::Arc;

use clap::Parser;

use nyra::cli::{Cli, Commands};
use nyra::config::Settings;
use nyra::error::Result;
use nyra::host::HostInfo;
use nyra::tui::{self, StartScreen};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let host = HostInfo::detect();

    match cli.command {
        Some(Commands::Info) => {
            println!("{}", serde_json::to_string_pretty(&host)?);
            Ok(())
        }
        Some(Commands::Chat) => tui::run(settings, host, StartScreen::Chat).await,
        Some(Commands::Setup) => tui::run(settings, host, StartScreen::Setup).await,
        None => tui::run(settings, host, StartScreen::Welcome).await,
    }
}

/// Initialize tracing. The TUI owns the terminal, so debug output goes
/// to a log file next to the cache dir instead of stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if cli.debug {
        env_filter = env_filter.add_directive(tracing::Level::DEBUG.into());

        let log_path = dirs::cache_dir()
            .map(|dir| dir.join("nyra"))
            .unwrap_or_else(std::env::temp_dir);
        std::fs::create_dir_all(&log_path)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path.join("nyra.log"))?;

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    Ok(())
}
