//! Generation client: one chat-completion call per request, always returning a
//! well-formed [`GenerationResult`].
//!
//! This is the only place that absorbs every failure of the call: service errors,
//! malformed responses, a timeout, and a panicking client all become
//! [`GenerationResult::Failure`]. No retries, no streaming, no caching.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::compose::GenerationRequest;
use crate::llm::{ChatRequest, LlmClient, LlmError};

/// Sampling temperature sent with every call.
pub const TEMPERATURE: f32 = 0.5;
/// Output length cap sent with every call.
pub const MAX_TOKENS: u32 = 1024;
/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Upper bound on one call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Outcome of one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(String),
    /// Diagnostic message for the user.
    Failure(String),
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success(_))
    }
}

/// Wraps an injected [`LlmClient`]; constructed once at startup and shared.
#[derive(Clone)]
pub struct GenerationClient {
    llm: Arc<dyn LlmClient>,
    timeout: Duration,
}

impl GenerationClient {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-call timeout (builder).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sends `request` to `model` with [`TEMPERATURE`] and [`MAX_TOKENS`].
    ///
    /// The call runs on its own task so a panic inside the client is reported as a
    /// failure instead of unwinding into the caller.
    pub async fn generate(&self, request: &GenerationRequest, model: &str) -> GenerationResult {
        let chat = ChatRequest {
            model: model.to_string(),
            messages: request.messages(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let llm = Arc::clone(&self.llm);
        let mut call = tokio::spawn(async move { llm.invoke(&chat).await });

        match tokio::time::timeout(self.timeout, &mut call).await {
            Ok(Ok(Ok(response))) => {
                debug!(model = %model, chars = response.content.len(), "generation succeeded");
                GenerationResult::Success(response.content)
            }
            Ok(Ok(Err(LlmError::Service(e)))) => {
                warn!(model = %model, error = %e, "generation service error");
                GenerationResult::Failure(format!(
                    "A consulta à API da OpenAI para gerar o prompt falhou: {}",
                    e
                ))
            }
            Ok(Ok(Err(LlmError::Unexpected(e)))) => {
                warn!(model = %model, error = %e, "generation returned unexpected response");
                GenerationResult::Failure(unexpected(e))
            }
            Ok(Err(join_err)) => {
                warn!(model = %model, error = %join_err, "generation task aborted");
                GenerationResult::Failure(unexpected(join_err))
            }
            Err(_) => {
                call.abort();
                warn!(model = %model, timeout = ?self.timeout, "generation timed out");
                GenerationResult::Failure(unexpected(format!(
                    "tempo limite de {}s excedido",
                    self.timeout.as_secs()
                )))
            }
        }
    }
}

fn unexpected(e: impl std::fmt::Display) -> String {
    format!("Um erro inesperado ocorreu ao gerar o prompt: {}", e)
}
