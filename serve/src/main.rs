//! promptsmith binary: loads config, installs logging, and runs the HTTP server.
//!
//! Configuration is environment-only (`.env` and `~/.config/promptsmith/config.toml`
//! are merged in first); there are no command-line flags.

use serve::{run_serve, ServeSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let applied = config::load_and_apply("promptsmith", None);
    config::logging::init()?;
    match applied {
        Ok(keys) => tracing::debug!(keys = ?keys, "config applied"),
        Err(e) => tracing::warn!(error = %e, "config not loaded; using process environment only"),
    }

    let settings = ServeSettings::from_env();
    run_serve(&settings).await
}
