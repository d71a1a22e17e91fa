//! OpenAI Chat Completions client implementing [`LlmClient`] (ChatOpenAI).
//!
//! One non-streaming `chat().create()` call per [`LlmClient::invoke`]; the first choice's
//! content is the result. Base URL defaults to `https://api.openai.com/v1`; a base
//! without a trailing `/v1` gets one appended.
//!
//! The client's retry backoff is disabled: a 429 or 5xx answer fails the call at once.

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoffBuilder;
use tracing::{debug, trace};

use crate::credential::ApiKey;
use crate::llm::{ChatRequest, LlmClient, LlmError, LlmResponse};
use crate::message::Message;

const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// OpenAI Chat Completions client.
///
/// Built once at startup from a validated [`ApiKey`] and shared by reference; the model and
/// sampling parameters come with each [`ChatRequest`].
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    api_base: String,
}

impl ChatOpenAI {
    /// Client for `api_key` against `base_url` (default OpenAI when `None`).
    pub fn new(api_key: &ApiKey, base_url: Option<&str>) -> Self {
        let api_base = normalize_api_base(base_url.unwrap_or(DEFAULT_API_BASE));
        let config = OpenAIConfig::new()
            .with_api_key(api_key.expose())
            .with_api_base(api_base.clone());
        let no_retry = ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build();
        Self {
            client: Client::with_config(config).with_backoff(no_retry),
            api_base,
        }
    }

    /// Base URL from `OPENAI_BASE_URL` or `OPENAI_API_BASE`, when either is set and non-empty.
    pub fn base_url_from_env() -> Option<String> {
        std::env::var("OPENAI_BASE_URL")
            .or_else(|_| std::env::var("OPENAI_API_BASE"))
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    /// The `/v1` API base this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
            })
            .collect()
    }
}

/// Trims trailing slashes and makes sure the base ends with `/v1`.
fn normalize_api_base(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.ends_with("/v1") {
        base.to_string()
    } else {
        format!("{}/v1", base)
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, LlmError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(request.model.clone());
        args.messages(Self::messages_to_request(&request.messages));
        args.temperature(request.temperature);
        // `max_tokens` rather than `max_completion_tokens`: OpenAI-compatible servers honor it.
        #[allow(deprecated)]
        args.max_tokens(request.max_tokens);

        let body = args
            .build()
            .map_err(|e| LlmError::Unexpected(format!("OpenAI request build failed: {}", e)))?;

        let url = format!("{}/chat/completions", self.api_base);
        debug!(
            trace_id = %trace_id,
            url = %url,
            model = %request.model,
            message_count = request.messages.len(),
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&body) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self.client.chat().create(body).await.map_err(|e| match e {
            OpenAIError::ApiError(_) | OpenAIError::Reqwest(_) => LlmError::Service(e.to_string()),
            other => LlmError::Unexpected(other.to_string()),
        })?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::Unexpected("OpenAI returned no choices".to_string()))?;
        let content = choice
            .message
            .content
            .ok_or_else(|| LlmError::Unexpected("OpenAI returned no message content".to_string()))?;

        debug!(
            trace_id = %trace_id,
            chars = content.len(),
            total_tokens = response.usage.as_ref().map(|u| u.total_tokens),
            "OpenAI chat done"
        );
        Ok(LlmResponse { content })
    }
}
