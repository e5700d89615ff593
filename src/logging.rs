//! Logging setup for `rmine`.
//!
//! Reports go to stdout, so log records are written to a daily rotated file
//! in the platform data directory instead:
//! - Linux: `~/.local/share/rmine/logs/`
//! - macOS: `~/Library/Application Support/rmine/logs/`
//! - Windows: `C:\Users\<User>\AppData\Local\rmine\logs\`
//!
//! The level is taken from `RUST_LOG`, e.g. `RUST_LOG=redmine_client=debug`
//! to see every request the client makes.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "rmine=info,redmine_client=info,warn";

const LOG_FILE_PREFIX: &str = "rmine.log";

/// Install the global subscriber and return the log directory.
///
/// # Errors
///
/// Fails if the log directory cannot be determined or created, or if a
/// global subscriber is already set.
pub fn init() -> anyhow::Result<PathBuf> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Could not create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(env_filter());

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rmine starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(log_dir)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("rmine").join("logs"))
}
