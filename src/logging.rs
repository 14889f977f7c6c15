//! Tracing subscriber setup
//!
//! The filter comes from `REVERSE_WORDLE_LOG` when set, otherwise from the
//! level given on the command line.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV: &str = "REVERSE_WORDLE_LOG";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Logging disabled; used while the TUI owns the terminal
    Discard,
}

/// Install the global subscriber
///
/// # Errors
/// Returns an error if the level is not a valid filter, the log file cannot
/// be created, or a subscriber is already installed.
pub fn init_logging(level: &str, target: &LogTarget) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("reverse_wordle={level}"))
            .with_context(|| format!("Invalid log level '{level}'"))?,
    };

    match target {
        LogTarget::Stderr => install(filter, std::io::stderr, true),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            install(filter, Mutex::new(file), false)
        }
        LogTarget::Discard => install(filter, std::io::sink, false),
    }
}

fn install<W>(filter: EnvFilter, writer: W, ansi: bool) -> Result<()>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {e}"))
}
