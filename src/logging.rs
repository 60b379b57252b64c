//! Logging setup for the countries tool.
//!
//! Library code only emits `tracing` events. The binary calls [`init`] once
//! at startup to route them:
//!
//! - **stderr**: compact, human readable, filtered by `RUST_LOG` or the
//!   configured level
//! - **file** (optional): non-ANSI lines in a daily rolling file under the
//!   platform data directory
//!
//! ```no_run
//! use countries::config::LoggingSettings;
//!
//! countries::logging::init(&LoggingSettings::default()).expect("Failed to initialize logging");
//! tracing::info!("App started");
//! ```

use crate::config::LoggingSettings;
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

const LOG_PREFIX: &str = "countries";

/// Gets the log directory path based on platform conventions
///
/// Returns:
/// - Windows: `%APPDATA%/countries/logs`
/// - macOS: `~/Library/Application Support/countries/logs`
/// - Linux: `~/.local/share/countries/logs`
///
/// # Errors
///
/// Fails when there is no data directory or it cannot be created.
pub fn log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    log_dir_under(&base_dir)
}

/// `<base>/countries/logs`, created if missing.
///
/// # Errors
///
/// Fails when the directory cannot be created.
pub fn log_dir_under(base_dir: &Path) -> Result<PathBuf> {
    let log_dir = base_dir.join(LOG_PREFIX).join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Path of today's log file inside `log_dir`. The rolling appender names
/// files by the UTC date.
pub fn current_log_path(log_dir: &Path) -> PathBuf {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("{LOG_PREFIX}.{today}.log"))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails when the filter directive is invalid or the log file cannot be set
/// up.
pub fn init(settings: &LoggingSettings) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact();

    let (file_layer, log_dir) = if settings.file {
        let log_dir = log_dir()?;
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .max_log_files(10)
            .filename_prefix(LOG_PREFIX)
            .filename_suffix("log")
            .build(&log_dir)
            .context("Failed to create file appender")?;

        let layer = fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_file(true)
            .with_ansi(false)
            .with_writer(appender);
        (Some(layer), Some(log_dir))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if let Some(log_dir) = log_dir {
        tracing::info!(path = %current_log_path(&log_dir).display(), "File logging enabled");
    }

    Ok(())
}
