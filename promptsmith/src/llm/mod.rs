//! LLM client abstraction for the generation call.
//!
//! [`GenerationClient`](crate::GenerationClient) depends on a callable that turns a
//! [`ChatRequest`] into assistant text; this module defines the trait, the OpenAI
//! implementation ([`ChatOpenAI`]) and a mock for tests ([`MockLlm`]).

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;
use thiserror::Error;

use crate::message::Message;

/// Errors from one chat-completion call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// The service answered with an error or could not be reached.
    #[error("{0}")]
    Service(String),
    /// Request could not be built or the response had an unexpected shape.
    #[error("{0}")]
    Unexpected(String),
}

/// One chat-completion request: model, messages and sampling parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Response from a completion.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
}

/// LLM client: given a request, returns the assistant text.
///
/// Implementations: [`MockLlm`] (fixed reply or failure), [`ChatOpenAI`] (real API).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One completion call. No retries.
    async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubLlm {
        content: String,
    }

    #[async_trait]
    impl LlmClient for StubLlm {
        async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, LlmError> {
            Ok(LlmResponse {
                content: format!("{}:{}", request.model, self.content),
            })
        }
    }

    #[tokio::test]
    async fn trait_object_invokes_implementation() {
        let llm: Box<dyn LlmClient> = Box::new(StubLlm {
            content: "hello".to_string(),
        });
        let req = ChatRequest {
            model: "m".to_string(),
            messages: vec![Message::user("hi")],
            temperature: 0.5,
            max_tokens: 10,
        };
        let resp = llm.invoke(&req).await.unwrap();
        assert_eq!(resp.content, "m:hello");
    }

    #[test]
    fn llm_error_display_is_message() {
        assert_eq!(LlmError::Service("boom".into()).to_string(), "boom");
        assert_eq!(LlmError::Unexpected("odd".into()).to_string(), "odd");
    }
}
