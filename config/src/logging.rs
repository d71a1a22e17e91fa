//! Tracing subscriber setup for binaries.
//!
//! - **RUST_LOG**: filter, e.g. `info`, `promptsmith=debug`. Default: `info,hyper_util=off`.
//! - **LOG_FILE**: when set, logs are appended to this file (no ANSI); otherwise they go to stderr.

use std::path::Path;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("LOG_FILE has no file name: {0}")]
    BadLogFile(String),
    #[error("set global subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper_util=off"))
}

/// Installs the global subscriber. Call once, after [`crate::load_and_apply`] so that
/// `RUST_LOG` / `LOG_FILE` from `.env` are honored.
pub fn init() -> Result<(), InitError> {
    match std::env::var("LOG_FILE") {
        Ok(path) if !path.trim().is_empty() => {
            let path = Path::new(&path);
            let file_name = path
                .file_name()
                .ok_or_else(|| InitError::BadLogFile(path.display().to_string()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(dir, file_name);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_filter(filter());
            tracing_subscriber::registry().with(layer).try_init()?;
            tracing::info!(path = %path.display(), "logging to file");
        }
        _ => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter());
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }
    Ok(())
}
