//! Logging Infrastructure
//!
//! Structured logging setup. The full-screen UI owns the terminal, so the
//! main entry writes to daily rotating files under `<log_dir>/app/`; the
//! console variant exists for headless use (tests, tooling).

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*};

/// Application log files older than this are removed by [`cleanup_old_logs`]
const MAX_LOG_AGE: Duration = Duration::from_secs(14 * 24 * 60 * 60);

/// Remove application log files older than 14 days
///
/// Call once at startup; a short-lived storefront session does not need a
/// periodic sweep.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    let now = SystemTime::now();
    for entry in fs::read_dir(app_log_dir)? {
        let entry = entry?;
        let path = entry.path();

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with("app") {
            continue;
        }

        let modified = entry.metadata()?.modified()?;
        // duration_since fails only if the clock moved backwards; treat
        // such files as fresh
        if now.duration_since(modified).unwrap_or_default() > MAX_LOG_AGE {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

/// Initialize logging to daily rotating files under `<log_dir>/app/`
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn"); `RUST_LOG`
///   overrides it
/// * `json_format` - Whether to write JSON lines instead of plain text
/// * `log_dir` - Directory for file logging
pub fn init_logger_with_file(level: &str, json_format: bool, log_dir: &Path) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let app_log_dir = log_dir.join("app");
    fs::create_dir_all(&app_log_dir)?;

    // Daily rotating appender for application logs
    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let app_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(app_log));

        subscriber.with(app_layer).init();
    } else {
        let app_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(app_log));

        subscriber.with(app_layer).init();
    }

    Ok(())
}

/// Initialize the logging system (console only)
///
/// Convenience function for headless use where nothing owns the terminal
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        subscriber.with(console_layer).init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true);

        subscriber.with(console_layer).init();
    }

    Ok(())
}
