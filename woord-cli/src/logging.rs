//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the TUI, so events go to a log file instead of
//! stdout/stderr.
//!
//! - `warn`: lists or records that could not be used
//! - `info`: pipeline stages and counts
//! - `debug`: individual requests

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "woord";
const LOG_FILENAME: &str = "woord.log";

/// Default log file location
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR)
        .join(LOG_FILENAME)
}

/// Filter directive for a `-v` count
///
/// - 0: info
/// - 1: debug
/// - 2+: trace
pub fn level_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("woord={level},woord_core={level}")
}

/// Install the global subscriber writing to `log_file`.
/// `RUST_LOG` overrides the verbosity flag when set.
pub fn init_logging(verbosity: u8, log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| eyre!("failed to install logger: {e}"))
}
