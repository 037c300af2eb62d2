use serde::{Serialize, Deserialize};

/// Engine configuration.
///
/// Defaults mirror the production letter archive deployment: nine searchable
/// fields, ten thousand vocabulary terms, 150-character excerpts and a
/// thousand-entry result cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Record fields folded into the indexed text, in indexing order.
    pub search_fields: Vec<String>,
    /// Vocabulary cap across unigrams, bigrams and trigrams.
    pub max_terms: usize,
    /// Target excerpt width in characters.
    pub window_size: usize,
    /// Default result count when the caller does not override it.
    pub top_n: usize,
    /// Capacity of the query result cache.
    pub result_cache_size: usize,
    /// Capacity of the normalization memo cache.
    pub normalize_cache_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            search_fields: [
                "Название",
                "Дата",
                "Аннотация",
                "Текст",
                "Источник",
                "Отправитель",
                "Получатель",
                "Локация",
                "Год",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            max_terms: 10_000,
            window_size: 150,
            top_n: 5,
            result_cache_size: 1_000,
            normalize_cache_size: 8_192,
        }
    }
}
