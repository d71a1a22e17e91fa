//! `POST /api/generate` and `GET /api/topics`.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::app::AppState;
use super::response::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Free-text objective typed by the user.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub topic: TopicRef,
    /// Generated prompt, ready to copy.
    pub prompt: String,
}

/// Runs one interaction. Errors map to status codes in [`ApiError`].
pub(crate) async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let forged = state.forge.forge(&req.text).await.map_err(|e| {
        info!(kind = e.kind(), "generate request failed");
        ApiError(e)
    })?;
    Ok(Json(GenerateResponse {
        topic: TopicRef {
            id: forged.topic_id,
            label: forged.topic_label,
        },
        prompt: forged.prompt,
    }))
}

/// Known topics in catalog order.
pub(crate) async fn handle_topics(State(state): State<Arc<AppState>>) -> Json<Vec<TopicRef>> {
    Json(
        state
            .forge
            .catalog()
            .topics()
            .map(|t| TopicRef {
                id: t.id.clone(),
                label: t.label.clone(),
            })
            .collect(),
    )
}
