//! One user interaction: credential gate, input check, topic match, compose, generate.
//!
//! [`PromptForge`] is built once at startup and shared by the presentation layer. Every
//! error returns control to the caller; nothing here is fatal to the process.

use tracing::{info, warn};

use crate::catalog::{builtin, Catalog};
use crate::compose::compose;
use crate::error::ForgeError;
use crate::generate::{GenerationClient, GenerationResult};

/// Successful interaction: the matched topic and the generated prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgedPrompt {
    pub topic_id: String,
    pub topic_label: String,
    pub prompt: String,
}

/// Entry point for the presentation layer.
pub struct PromptForge {
    catalog: &'static Catalog,
    generator: Option<GenerationClient>,
    model: String,
}

impl PromptForge {
    /// `generator` is `None` when the credential check failed at startup; every
    /// [`forge`](Self::forge) then fails with [`ForgeError::MissingCredential`].
    pub fn new(generator: Option<GenerationClient>, model: impl Into<String>) -> Self {
        Self::with_catalog(builtin(), generator, model)
    }

    pub fn with_catalog(
        catalog: &'static Catalog,
        generator: Option<GenerationClient>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            generator,
            model: model.into(),
        }
    }

    /// Whether generation is available (credential was valid at startup).
    pub fn is_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Runs one interaction for `text`. At most one generation call is made.
    pub async fn forge(&self, text: &str) -> Result<ForgedPrompt, ForgeError> {
        let generator = self.generator.as_ref().ok_or(ForgeError::MissingCredential)?;
        if text.trim().is_empty() {
            return Err(ForgeError::EmptyInput);
        }

        let Some(topic) = self.catalog.identify(text) else {
            info!(chars = text.len(), "no topic matched");
            return Err(ForgeError::NoTopicMatched {
                labels: self.catalog.labels(),
            });
        };
        info!(topic = %topic.id, model = %self.model, "topic identified");

        let request = compose(topic, text);
        match generator.generate(&request, &self.model).await {
            GenerationResult::Success(prompt) => Ok(ForgedPrompt {
                topic_id: topic.id.clone(),
                topic_label: topic.label.clone(),
                prompt,
            }),
            GenerationResult::Failure(message) => {
                warn!(topic = %topic.id, "generation failed");
                Err(ForgeError::GenerationFailure(message))
            }
        }
    }
}
