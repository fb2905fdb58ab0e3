//! Log subscriber setup for the `dsurl` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedders keep control of their own.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config provides a valid one.
pub const DEFAULT_FILTER: &str = "info,dsurl_core=debug";

/// Where [`init_logging`] ended up sending log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    /// The log file could not be opened; `reason` says why.
    Stderr { reason: String },
}

/// `$XDG_STATE_HOME/dsurl/dsurl.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsurl")?;
    Ok(xdg_dirs.get_state_home().join("dsurl").join("dsurl.log"))
}

fn open_log_file() -> Result<(PathBuf, File)> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((path, file))
}

/// The config directive if it parses as a filter, otherwise [`DEFAULT_FILTER`].
fn config_directive(configured: Option<&str>) -> &str {
    match configured {
        Some(directive) if EnvFilter::try_new(directive).is_ok() => directive,
        _ => DEFAULT_FILTER,
    }
}

/// Installs the global subscriber: `RUST_LOG` wins, then `configured`, then the default.
///
/// Logs go to the state-dir log file, or to stderr when that file can't be
/// opened. Fails only if a global subscriber is already installed.
pub fn init_logging(configured: Option<&str>) -> Result<LogDestination> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config_directive(configured)));

    let (writer, destination) = match open_log_file() {
        Ok((path, file)) => (
            BoxMakeWriter::new(Mutex::new(file)),
            LogDestination::File(path),
        ),
        Err(e) => (
            BoxMakeWriter::new(std::io::stderr),
            LogDestination::Stderr {
                reason: format!("{:#}", e),
            },
        ),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    match &destination {
        LogDestination::File(path) => {
            tracing::info!("dsurl logging initialized at {}", path.display())
        }
        LogDestination::Stderr { reason } => {
            tracing::warn!("file logging unavailable, using stderr: {}", reason)
        }
    }
    Ok(destination)
}
