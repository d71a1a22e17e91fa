//! # Promptsmith
//!
//! Turns a free-text objective into a ready-to-paste prompt for another AI. The text is
//! matched against a small fixed catalog of electrical engineering topics; when a topic
//! matches, its guidelines and the objective are sent to an OpenAI-compatible chat model
//! that writes the prompt.
//!
//! ## Flow
//!
//! [`PromptForge::forge`] → [`Catalog::identify`] → [`compose`] →
//! [`GenerationClient::generate`] → [`ForgedPrompt`] or [`ForgeError`].
//!
//! ## Main modules
//!
//! - [`catalog`]: [`TopicDefinition`], [`Catalog`], the builtin table ([`builtin`]).
//! - [`matcher`]: whole-word keyword matching, first topic in catalog order wins ([`identify_topic`]).
//! - [`compose`]: [`GenerationRequest`], [`PromptParts`], [`SYSTEM_PERSONA`].
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`generate`]: [`GenerationClient`], [`GenerationResult`].
//! - [`credential`]: [`ApiKey`] read from `OPENAI_API_KEY`.
//! - [`forge`]: [`PromptForge`], one interaction end to end.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use promptsmith::{ApiKey, ChatOpenAI, GenerationClient, PromptForge};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let key = ApiKey::from_env()?;
//! let llm = Arc::new(ChatOpenAI::new(&key, None));
//! let forge = PromptForge::new(Some(GenerationClient::new(llm)), "gpt-4o");
//! let out = forge.forge("Quero reduzir perdas na minha rede de 13.8kV").await?;
//! println!("{}", out.prompt);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod compose;
pub mod credential;
pub mod error;
pub mod forge;
pub mod generate;
pub mod llm;
pub mod matcher;
pub mod message;

pub use catalog::{builtin, Catalog, CatalogError, TopicDefinition};
pub use compose::{compose, GenerationRequest, PromptParts, SYSTEM_PERSONA};
pub use credential::{ApiKey, CredentialError, API_KEY_ENV};
pub use error::ForgeError;
pub use forge::{ForgedPrompt, PromptForge};
pub use generate::{
    GenerationClient, GenerationResult, DEFAULT_MODEL, DEFAULT_TIMEOUT, MAX_TOKENS, TEMPERATURE,
};
pub use llm::{ChatOpenAI, ChatRequest, LlmClient, LlmError, LlmResponse, MockLlm};
pub use matcher::identify_topic;
pub use message::Message;
