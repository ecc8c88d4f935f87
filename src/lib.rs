//! rWorkHours library root.
//! Exposes the input normalizer, the duration calculator, the work form
//! state, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg),
        Commands::Form => cli::commands::form::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging on stderr
    logging::init_logging()?;

    // 3️⃣ config path, overridable from the command line
    let cfg_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    // 4️⃣ `init` and `config --edit` must work even when the existing file is broken
    let cfg = match &cli.command {
        Commands::Init { .. } => Config::default(),
        Commands::Config {
            edit_config: true, ..
        } => Config::load_from(&cfg_path).unwrap_or_else(|e| {
            warn!(path = %cfg_path.display(), "invalid configuration: {}", e);
            ui::messages::warning(format!("{} (opening the editor anyway)", e));
            Config::default()
        }),
        _ => Config::load_from(&cfg_path)?,
    };
    debug!(path = %cfg_path.display(), "dispatching");

    dispatch(&cli, &cfg, &cfg_path)
}
