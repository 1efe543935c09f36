//! dirlist - Recursive directory listings and feeds for static file trees.

mod cli;
mod config;
mod feed;
mod index;
mod logger;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::TreeConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let command = cli.resolve_command();
    let config = TreeConfig::load(&cli, &command, &cwd)?;

    match command {
        Commands::Index { .. } => cli::index::run_index(&config),
        Commands::Feed { .. } => cli::feed::run_feed(&config),
    }
}
