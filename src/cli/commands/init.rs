use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` subcommand
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    let force = matches!(cli.command, Commands::Init { force: true });

    if path.exists() && !force {
        warning(format!(
            "Config file already exists: {:?} (use --force to overwrite)",
            path
        ));
        return Ok(());
    }

    if cli.test {
        info("Test mode: configuration file not written");
        return Ok(());
    }

    Config::default().save_to(path)?;
    success(format!("Config file: {:?}", path));

    Ok(())
}
