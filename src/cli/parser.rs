use crate::errors::{AppError, AppResult};
use crate::models::FieldId;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkHours
/// CLI application to calculate net working hours
#[derive(Parser)]
#[command(
    name = "rworkhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours calculator: start, end and break in, net worked time out",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Calculate net worked time once
    Calc {
        /// Start time (H:MM); defaults to the configured start
        #[arg(long = "start", value_name = "H:MM")]
        start: Option<String>,

        /// End time (H:MM); defaults to the configured end
        #[arg(long = "end", value_name = "H:MM")]
        end: Option<String>,

        /// Break duration (H:MM); defaults to the configured break
        #[arg(long = "break", value_name = "H:MM")]
        break_time: Option<String>,

        #[arg(long, help = "Print the result as JSON")]
        json: bool,
    },

    /// Interactive form: edit fields line by line and watch the result
    Form,
}

/// Resolve a field code typed by the user (`start-hour`, `sh`, ...).
pub fn parse_field(code: &str) -> AppResult<FieldId> {
    FieldId::from_code(code).ok_or_else(|| AppError::UnknownField(code.to_string()))
}
