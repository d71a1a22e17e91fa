//! Mock LLM for tests.
//!
//! Returns a fixed assistant reply or a fixed error, counts calls and keeps the last
//! request so tests can assert on what would have been sent.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::{ChatRequest, LlmClient, LlmError, LlmResponse};

enum Reply {
    Content(String),
    ServiceError(String),
    Panic,
}

/// Mock LLM: fixed reply, fixed service error, or a panic (to exercise fault isolation).
pub struct MockLlm {
    reply: Reply,
    calls: AtomicUsize,
    last_request: Mutex<Option<ChatRequest>>,
}

impl MockLlm {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always answers with `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self::with_reply(Reply::Content(content.into()))
    }

    /// Always fails with [`LlmError::Service`] carrying `message` (e.g. a transport error).
    pub fn with_service_error(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::ServiceError(message.into()))
    }

    /// Panics inside `invoke`.
    pub fn panicking() -> Self {
        Self::with_reply(Reply::Panic)
    }

    /// Number of `invoke` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().ok().and_then(|g| g.clone())
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, request: &ChatRequest) -> Result<LlmResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut g) = self.last_request.lock() {
            *g = Some(request.clone());
        }
        match &self.reply {
            Reply::Content(c) => Ok(LlmResponse {
                content: c.clone(),
            }),
            Reply::ServiceError(m) => Err(LlmError::Service(m.clone())),
            Reply::Panic => panic!("mock llm panicked"),
        }
    }
}
