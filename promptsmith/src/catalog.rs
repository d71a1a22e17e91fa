//! Topic catalog: the fixed table of domain specializations offered to the user.
//!
//! Each [`TopicDefinition`] carries a display label, the keywords that select it and the
//! ordered guidelines handed to the generator. The builtin table is built once on first use
//! ([`builtin`]) and never mutated afterwards.
//!
//! Keyword regexes are compiled in [`Catalog::new`], so matching (see [`crate::matcher`])
//! never compiles or fails at request time.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// One domain specialization: label, identification keywords and prompt guidelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDefinition {
    /// Unique key within the catalog (e.g. `otimizacao_fluxo_carga`).
    pub id: String,
    /// Human-readable description shown to the user.
    pub label: String,
    /// Phrases whose whole-word presence in the user's text selects this topic. Checked in order.
    pub keywords: Vec<String>,
    /// Directives for the generator, rendered as bullets in this exact order.
    pub guidelines: Vec<String>,
}

impl TopicDefinition {
    /// Builds a definition from string slices.
    pub fn new(id: &str, label: &str, keywords: &[&str], guidelines: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            guidelines: guidelines.iter().map(|g| g.to_string()).collect(),
        }
    }
}

/// Rejected catalog definitions.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("topic id must not be empty")]
    EmptyId,
    #[error("duplicate topic id: {0}")]
    DuplicateId(String),
    #[error("topic {0} has no keywords")]
    EmptyKeywords(String),
    #[error("topic {id}: keyword {keyword:?} is blank")]
    BlankKeyword { id: String, keyword: String },
    #[error("topic {id}: keyword pattern: {source}")]
    Pattern {
        id: String,
        #[source]
        source: regex::Error,
    },
}

/// A topic together with its compiled keyword patterns (same order as `keywords`).
#[derive(Debug)]
pub(crate) struct CompiledTopic {
    pub(crate) topic: TopicDefinition,
    pub(crate) patterns: Vec<Regex>,
}

/// Ordered, validated set of topics. Order is significant: the first matching topic wins.
#[derive(Debug)]
pub struct Catalog {
    pub(crate) entries: Vec<CompiledTopic>,
}

impl Catalog {
    /// Validates and compiles the given topics, keeping their order.
    ///
    /// Fails when an id is empty or repeated, when a topic has no keywords, or when a
    /// keyword is blank.
    pub fn new(topics: Vec<TopicDefinition>) -> Result<Self, CatalogError> {
        let mut entries: Vec<CompiledTopic> = Vec::with_capacity(topics.len());
        for topic in topics {
            if topic.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if entries.iter().any(|e| e.topic.id == topic.id) {
                return Err(CatalogError::DuplicateId(topic.id));
            }
            if topic.keywords.is_empty() {
                return Err(CatalogError::EmptyKeywords(topic.id));
            }
            let mut patterns = Vec::with_capacity(topic.keywords.len());
            for keyword in &topic.keywords {
                if keyword.trim().is_empty() {
                    return Err(CatalogError::BlankKeyword {
                        id: topic.id.clone(),
                        keyword: keyword.clone(),
                    });
                }
                let pattern = keyword_pattern(keyword).map_err(|source| CatalogError::Pattern {
                    id: topic.id.clone(),
                    source,
                })?;
                patterns.push(pattern);
            }
            entries.push(CompiledTopic { topic, patterns });
        }
        Ok(Self { entries })
    }

    /// Topics in catalog order.
    pub fn topics(&self) -> impl Iterator<Item = &TopicDefinition> {
        self.entries.iter().map(|e| &e.topic)
    }

    /// Looks up a topic by id.
    pub fn get(&self, id: &str) -> Option<&TopicDefinition> {
        self.topics().find(|t| t.id == id)
    }

    /// Display labels in catalog order (used when no topic matched).
    pub fn labels(&self) -> Vec<String> {
        self.topics().map(|t| t.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whole-word (or whole-phrase) pattern for one keyword. `\b` is Unicode-aware, so
/// accented letters count as word characters.
fn keyword_pattern(keyword: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(&keyword.to_lowercase())))
}

pub const FLOW_OPTIMIZATION_ID: &str = "otimizacao_fluxo_carga";
pub const DEMAND_FORECAST_ID: &str = "previsao_demanda_energia";

fn builtin_topics() -> Vec<TopicDefinition> {
    vec![
        TopicDefinition::new(
            FLOW_OPTIMIZATION_ID,
            "Otimização de Fluxo de Carga",
            &[
                "fluxo de carga",
                "otimização de fluxo",
                "otimizar rede",
                "fluxo de potência",
                "despacho de geração",
                "reduzir perdas",
            ],
            &[
                "Definir a persona da IA como 'especialista em engenharia elétrica com foco em sistemas de potência'.",
                "Estruturar o prompt para solicitar informações essenciais como: Contexto do Sistema, Objetivo da Otimização, Dados Disponíveis e Métodos Preferenciais.",
                "Incluir uma instrução para a IA final 'pensar passo a passo' (Chain-of-Thought) antes de dar a resposta.",
                "Pedir que a resposta final seja estruturada, por exemplo, com um roteiro detalhado, lista de parâmetros e análise de premissas.",
                "Incorporar uma nota sobre a importância de usar princípios de engenharia e boas práticas da indústria.",
            ],
        ),
        TopicDefinition::new(
            DEMAND_FORECAST_ID,
            "Previsão de Demanda de Energia",
            &[
                "previsão de demanda",
                "prever carga",
                "demanda futura",
                "consumo futuro",
                "projeção de carga",
            ],
            &[
                "Definir a persona da IA como 'especialista em engenharia elétrica e análise de dados'.",
                "Estruturar o prompt para solicitar o escopo da previsão, período, dados históricos disponíveis, fatores a considerar e técnicas de interesse.",
                "Pedir que a IA final sugira uma metodologia passo a passo.",
                "Solicitar uma análise comparativa de diferentes técnicas de modelagem (prós e contras).",
                "Incluir uma instrução para a IA final discutir os principais desafios e como mitigá-los.",
                "Requerer que a IA final explique seu raciocínio e mencione as premissas importantes.",
            ],
        ),
    ]
}

static BUILTIN: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(builtin_topics()).expect("builtin catalog is valid"));

/// The process-wide builtin catalog (power-flow optimization, demand forecasting).
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_two_topics_in_order() {
        let ids: Vec<&str> = builtin().topics().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec![FLOW_OPTIMIZATION_ID, DEMAND_FORECAST_ID]);
        assert_eq!(
            builtin().labels(),
            vec![
                "Otimização de Fluxo de Carga".to_string(),
                "Previsão de Demanda de Energia".to_string()
            ]
        );
    }

    #[test]
    fn builtin_topics_have_keywords_and_guidelines() {
        for topic in builtin().topics() {
            assert!(!topic.keywords.is_empty(), "{} has no keywords", topic.id);
            assert!(!topic.guidelines.is_empty(), "{} has no guidelines", topic.id);
        }
        assert_eq!(builtin().get(FLOW_OPTIMIZATION_ID).unwrap().guidelines.len(), 5);
        assert_eq!(builtin().get(DEMAND_FORECAST_ID).unwrap().guidelines.len(), 6);
    }

    #[test]
    fn get_unknown_id_returns_none() {
        assert!(builtin().get("nope").is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = Catalog::new(vec![
            TopicDefinition::new("a", "A", &["x"], &[]),
            TopicDefinition::new("a", "A again", &["y"], &[]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn empty_keywords_are_rejected() {
        let err = Catalog::new(vec![TopicDefinition::new("a", "A", &[], &["g"])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyKeywords(id) if id == "a"));
    }

    #[test]
    fn blank_keyword_and_empty_id_are_rejected() {
        let err = Catalog::new(vec![TopicDefinition::new("a", "A", &["  "], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::BlankKeyword { .. }));

        let err = Catalog::new(vec![TopicDefinition::new("", "A", &["x"], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId));
    }

    #[test]
    fn keyword_with_regex_metacharacters_compiles() {
        let catalog =
            Catalog::new(vec![TopicDefinition::new("a", "A", &["13.8kv (mt)"], &[])]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
