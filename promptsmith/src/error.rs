//! Error kinds surfaced to the user for one interaction.
//!
//! Every variant ends the current interaction only; the caller returns to the idle state
//! and the user may edit the text and try again.

use thiserror::Error;

/// Outcome of a failed interaction. Display strings are the user-facing (pt-BR) messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// No usable API key at startup; generation stays disabled for the process lifetime.
    #[error("O cliente OpenAI não pôde ser inicializado. Verifique sua API Key ou a conexão.")]
    MissingCredential,

    /// Blank objective; no call is made.
    #[error("Por favor, descreva o objetivo do seu prompt.")]
    EmptyInput,

    /// No catalog topic matched; `labels` lists the known topics in catalog order.
    #[error(
        "Não foi possível identificar um tópico principal válido a partir da sua descrição. \
         Por favor, inclua palavras-chave mais específicas relacionadas a um dos seguintes domínios: {}.",
        quoted_labels(.labels)
    )]
    NoTopicMatched { labels: Vec<String> },

    /// The generation call failed; the message is shown verbatim.
    #[error("ERRO: {0}")]
    GenerationFailure(String),
}

impl ForgeError {
    /// Stable machine-readable kind (used in HTTP error bodies and logs).
    pub fn kind(&self) -> &'static str {
        match self {
            ForgeError::MissingCredential => "missing_credential",
            ForgeError::EmptyInput => "empty_input",
            ForgeError::NoTopicMatched { .. } => "no_topic_matched",
            ForgeError::GenerationFailure(_) => "generation_failure",
        }
    }
}

fn quoted_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| format!("'{}'", l))
        .collect::<Vec<_>>()
        .join(" ou ")
}
