//! API key for the generation service, validated once at startup.

use std::fmt;

use thiserror::Error;

/// Environment variable holding the generation service key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Chave da API OpenAI não encontrada. Certifique-se de que a variável de ambiente OPENAI_API_KEY está configurada.")]
    Missing,
    #[error("Chave da API OpenAI inválida: contém espaços ou caracteres de controle.")]
    Invalid,
}

/// A non-empty API key without whitespace or control characters. `Debug` does not print it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates `raw` (surrounding whitespace is trimmed first).
    pub fn parse(raw: &str) -> Result<Self, CredentialError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(CredentialError::Missing);
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CredentialError::Invalid);
        }
        Ok(Self(key.to_string()))
    }

    /// Reads and validates [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, CredentialError> {
        match std::env::var(API_KEY_ENV) {
            Ok(v) => Self::parse(&v),
            Err(_) => Err(CredentialError::Missing),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
