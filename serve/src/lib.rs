//! HTTP server for promptsmith (axum).
//!
//! Listens on `PROMPTSMITH_ADDR` (default http://127.0.0.1:8501) and serves the single
//! page plus the JSON endpoint behind it.
//!
//! **Public API**: [`run_serve`], [`run_serve_on_listener`], [`AppState`], [`ServeSettings`].

mod app;
mod generate;
mod page;
mod response;

use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

pub use app::{router, AppState, ServeSettings};
pub use generate::{GenerateRequest, GenerateResponse, TopicRef};
pub use response::ErrorBody;

/// Serves on an existing listener until `shutdown` resolves. Used by tests (bind to
/// 127.0.0.1:0 then pass the listener).
pub async fn run_serve_on_listener(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr = listener.local_addr()?;
    info!(
        enabled = state.forge.is_enabled(),
        model = %state.forge.model(),
        "HTTP server listening on http://{}",
        addr
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server stopped");
    Ok(())
}

/// Binds `settings.addr`, builds the state from the environment and serves until Ctrl-C.
pub async fn run_serve(
    settings: &ServeSettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let listener = TcpListener::bind(&settings.addr).await?;
    let state = Arc::new(AppState::from_settings(settings));
    run_serve_on_listener(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}
