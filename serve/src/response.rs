//! JSON error bodies and status codes for failed interactions.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use promptsmith::ForgeError;
use serde::{Deserialize, Serialize};

/// Body of every non-2xx `/api/generate` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable kind: `missing_credential`, `empty_input`, `no_topic_matched`, `generation_failure`.
    pub kind: String,
    /// User-facing message.
    pub error: String,
    /// Known topic labels, present for `no_topic_matched`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// [`ForgeError`] as an HTTP response.
pub(crate) struct ApiError(pub(crate) ForgeError);

pub(crate) fn status_for(err: &ForgeError) -> StatusCode {
    match err {
        ForgeError::MissingCredential => StatusCode::SERVICE_UNAVAILABLE,
        ForgeError::EmptyInput => StatusCode::BAD_REQUEST,
        ForgeError::NoTopicMatched { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ForgeError::GenerationFailure(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let topics = match &self.0 {
            ForgeError::NoTopicMatched { labels } => Some(labels.clone()),
            _ => None,
        };
        let body = ErrorBody {
            kind: self.0.kind().to_string(),
            error: self.0.to_string(),
            topics,
        };
        (status, Json(body)).into_response()
    }
}
