//! Tracing setup. Logs go to stderr so stdout stays clean for results.

use crate::errors::{AppError, AppResult};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Environment variable holding the log filter, e.g. `RWORKHOURS_LOG=debug`.
pub const LOG_ENV: &str = "RWORKHOURS_LOG";

/// Initialize logging with environment-based configuration
pub fn init_logging() -> AppResult<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}
