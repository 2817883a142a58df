//! rVenueReport library root.
//! Exposes the CLI parser, the high-level run() function and the report pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod input;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // --config overrides the per-user file
    let cfg_path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    // `init` must work even when the existing file no longer parses
    let cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load_from(&cfg_path)?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}
