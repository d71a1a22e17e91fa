//! Prompt composition: turns a matched topic and the user's objective into the
//! (system, user) message pair sent to the generator.
//!
//! Assembly goes through [`PromptParts`], which takes the guidelines as an explicit ordered
//! slice. The output is deterministic for a given input.

use crate::catalog::TopicDefinition;
use crate::message::Message;

/// Fixed persona and quality bar for the generator; independent of topic and input.
pub const SYSTEM_PERSONA: &str = "Você é uma IA especialista em Engenharia de Prompt, com profundo conhecimento em Engenharia Elétrica. \
Sua tarefa é gerar um prompt completo, detalhado, claro e otimizado para ser usado em outra IA (como GPT-4, Claude, etc.). \
O prompt que você criar deve ser robusto e capaz de extrair uma resposta técnica de alta qualidade da IA final.";

const USER_INTRO: &str = "Preciso que você crie um prompt otimizado. Analise meu objetivo e as diretrizes para o tópico e gere o melhor prompt possível.";

const CLOSING_INSTRUCTION: &str = "O prompt gerado deve ser auto-contido e pronto para ser copiado e colado. \
Ele deve preencher os detalhes mencionados no meu objetivo diretamente no corpo do prompt que você criar. \
Por exemplo, se meu objetivo menciona 'reduzir perdas em uma rede de 13.8kV', o prompt que você criar deve incluir explicitamente 'reduzir perdas' e 'rede de 13.8kV' nos locais apropriados.";

/// The two messages for one generation call. Built per call and dropped after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System-role instruction (persona).
    pub system: String,
    /// User-role instruction (objective, topic, guidelines, closing).
    pub user: String,
}

impl GenerationRequest {
    /// Messages in send order: system first, then user.
    pub fn messages(&self) -> Vec<Message> {
        vec![
            Message::system(self.system.clone()),
            Message::user(self.user.clone()),
        ]
    }
}

/// Structured inputs for [`PromptParts::build`].
#[derive(Debug, Clone, Copy)]
pub struct PromptParts<'a> {
    pub persona: &'a str,
    /// The user's text, embedded verbatim.
    pub objective: &'a str,
    pub topic_label: &'a str,
    /// Rendered as `- ` bullets in this order.
    pub guidelines: &'a [String],
}

impl PromptParts<'_> {
    pub fn build(&self) -> GenerationRequest {
        let bullets = self
            .guidelines
            .iter()
            .map(|g| format!("- {}", g))
            .collect::<Vec<_>>()
            .join("\n");
        let user = format!(
            "{USER_INTRO}\n\n\
             **Meu Objetivo:**\n\"{objective}\"\n\n\
             **Tópico Identificado:**\n{label}\n\n\
             **Diretrizes para a Criação do Prompt:**\n{bullets}\n\n\
             {CLOSING_INSTRUCTION}",
            objective = self.objective,
            label = self.topic_label,
        );
        GenerationRequest {
            system: self.persona.to_string(),
            user,
        }
    }
}

/// Builds the request for `topic` with the fixed [`SYSTEM_PERSONA`].
pub fn compose(topic: &TopicDefinition, user_text: &str) -> GenerationRequest {
    PromptParts {
        persona: SYSTEM_PERSONA,
        objective: user_text,
        topic_label: &topic.label,
        guidelines: &topic.guidelines,
    }
    .build()
}
