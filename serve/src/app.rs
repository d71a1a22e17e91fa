//! Axum app: settings, shared state, and router.
//!
//! Routes: `GET /` (page), `POST /api/generate` (one interaction), `GET /api/topics`.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use promptsmith::{
    ApiKey, ChatOpenAI, GenerationClient, PromptForge, DEFAULT_MODEL, DEFAULT_TIMEOUT,
};
use tracing::{error, info};

use super::generate::{handle_generate, handle_topics};
use super::page::handle_page;

pub(crate) const DEFAULT_ADDR: &str = "127.0.0.1:8501";

/// Server settings read from the environment (after `config::load_and_apply`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServeSettings {
    /// `PROMPTSMITH_ADDR` (default `127.0.0.1:8501`).
    pub addr: String,
    /// `OPENAI_MODEL` (default `gpt-4o`).
    pub model: String,
    /// `OPENAI_BASE_URL` / `OPENAI_API_BASE`; OpenAI when unset.
    pub base_url: Option<String>,
    /// `PROMPTSMITH_TIMEOUT_SECS` (default 60; `0` falls back to the default).
    pub timeout: Duration,
}

impl ServeSettings {
    /// Builds settings from environment variables, falling back to defaults for unset or
    /// invalid values.
    pub fn from_env() -> Self {
        Self {
            addr: config::env_string("PROMPTSMITH_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            model: config::env_string("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: ChatOpenAI::base_url_from_env(),
            timeout: match config::env_parse("PROMPTSMITH_TIMEOUT_SECS", 0u64) {
                0 => DEFAULT_TIMEOUT,
                secs => Duration::from_secs(secs),
            },
        }
    }
}

/// Shared state for the HTTP server. Built once at startup, read-only afterwards.
pub struct AppState {
    pub(crate) forge: PromptForge,
    /// User-visible reason generation is disabled (credential check failed at startup).
    pub(crate) startup_error: Option<String>,
}

impl AppState {
    /// State around an already built forge. `startup_error` is shown on the page.
    pub fn new(forge: PromptForge, startup_error: Option<String>) -> Self {
        Self {
            forge,
            startup_error,
        }
    }

    /// Checks `OPENAI_API_KEY` and builds the OpenAI-backed forge. A missing or invalid
    /// key does not fail startup: generation is disabled and the page shows the error.
    pub fn from_settings(settings: &ServeSettings) -> Self {
        match ApiKey::from_env() {
            Ok(key) => {
                let llm = Arc::new(ChatOpenAI::new(&key, settings.base_url.as_deref()));
                info!(api_base = %llm.api_base(), model = %settings.model, "generation client ready");
                let generator = GenerationClient::new(llm).with_timeout(settings.timeout);
                Self::new(PromptForge::new(Some(generator), settings.model.clone()), None)
            }
            Err(e) => {
                error!(error = %e, "credential check failed; generation disabled");
                Self::new(PromptForge::new(None, settings.model.clone()), Some(e.to_string()))
            }
        }
    }
}

/// Builds the Axum router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handle_page))
        .route("/api/generate", post(handle_generate))
        .route("/api/topics", get(handle_topics))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 5] = [
        "PROMPTSMITH_ADDR",
        "OPENAI_MODEL",
        "OPENAI_BASE_URL",
        "OPENAI_API_BASE",
        "PROMPTSMITH_TIMEOUT_SECS",
    ];

    #[test]
    fn settings_default_when_unset() {
        temp_env::with_vars_unset(VARS, || {
            let s = ServeSettings::from_env();
            assert_eq!(s.addr, DEFAULT_ADDR);
            assert_eq!(s.model, DEFAULT_MODEL);
            assert_eq!(s.base_url, None);
            assert_eq!(s.timeout, DEFAULT_TIMEOUT);
        });
    }

    #[test]
    fn settings_read_from_env() {
        temp_env::with_vars(
            [
                ("PROMPTSMITH_ADDR", Some("0.0.0.0:9000")),
                ("OPENAI_MODEL", Some("gpt-4o-mini")),
                ("OPENAI_BASE_URL", Some("http://proxy/v1")),
                ("OPENAI_API_BASE", None),
                ("PROMPTSMITH_TIMEOUT_SECS", Some("oops")),
            ],
            || {
                let s = ServeSettings::from_env();
                assert_eq!(s.addr, "0.0.0.0:9000");
                assert_eq!(s.model, "gpt-4o-mini");
                assert_eq!(s.base_url.as_deref(), Some("http://proxy/v1"));
                assert_eq!(s.timeout, DEFAULT_TIMEOUT);
            },
        );
    }

    #[test]
    fn zero_or_custom_timeout() {
        temp_env::with_var("PROMPTSMITH_TIMEOUT_SECS", Some("0"), || {
            assert_eq!(ServeSettings::from_env().timeout, DEFAULT_TIMEOUT);
        });
        temp_env::with_var("PROMPTSMITH_TIMEOUT_SECS", Some("15"), || {
            assert_eq!(ServeSettings::from_env().timeout, Duration::from_secs(15));
        });
    }

    #[test]
    fn missing_key_disables_generation() {
        temp_env::with_var_unset("OPENAI_API_KEY", || {
            let state = AppState::from_settings(&ServeSettings::from_env());
            assert!(!state.forge.is_enabled());
            assert!(state
                .startup_error
                .as_deref()
                .is_some_and(|e| e.contains("OPENAI_API_KEY")));
        });
    }

    #[test]
    fn valid_key_enables_generation() {
        temp_env::with_var("OPENAI_API_KEY", Some("sk-test"), || {
            let state = AppState::from_settings(&ServeSettings::from_env());
            assert!(state.forge.is_enabled());
            assert!(state.startup_error.is_none());
        });
    }
}
