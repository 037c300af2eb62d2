use std::collections::HashMap;
use serde::{Serialize, Deserialize};

use crate::analysis::normalizer::Normalizer;
use crate::core::types::Corpus;
use crate::index::vocabulary::{Vocabulary, ngram_terms};

/// TF-IDF document matrix in sparse row form.
///
/// Row entries are (column, weight) pairs sorted by column, L2-normalized
/// so that a dot product between unit rows is a cosine similarity. Weights
/// use the smoothed inverse document frequency ln((1+N)/(1+df)) + 1.
///
/// Built once over a fixed corpus; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorIndex {
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    rows: Vec<Vec<(u32, f32)>>,
}

impl VectorIndex {
    pub fn build(corpus: &Corpus, normalizer: &Normalizer, max_terms: usize) -> Self {
        let normalized: Vec<String> = corpus
            .documents()
            .iter()
            .map(|doc| normalizer.normalize(&doc.text))
            .collect();

        let vocabulary = Vocabulary::build(&normalized, max_terms);
        let doc_count = corpus.len();
        let idf: Vec<f32> = vocabulary
            .document_frequencies()
            .iter()
            .map(|&df| ((doc_count + 1) as f32 / (df + 1) as f32).ln() + 1.0)
            .collect();

        let rows = normalized
            .iter()
            .map(|doc| vectorize(doc, &vocabulary, &idf))
            .collect();

        tracing::debug!(
            "vector index built: {} documents, {} terms",
            doc_count,
            vocabulary.len()
        );

        VectorIndex {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Project a query into the index space. Terms outside the vocabulary
    /// contribute nothing; an empty result means the query shares no terms
    /// with the corpus.
    pub fn project(&self, normalizer: &Normalizer, query: &str) -> Vec<(u32, f32)> {
        let normalized = normalizer.normalize(query);
        vectorize(&normalized, &self.vocabulary, &self.idf)
    }

    pub fn rows(&self) -> &[Vec<(u32, f32)>] {
        &self.rows
    }

    pub fn doc_count(&self) -> usize {
        self.rows.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f32] {
        &self.idf
    }
}

/// Raw term counts weighted by idf, sorted by column, scaled to unit length.
fn vectorize(normalized: &str, vocabulary: &Vocabulary, idf: &[f32]) -> Vec<(u32, f32)> {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    for term in ngram_terms(normalized) {
        if let Some(column) = vocabulary.get(&term) {
            *counts.entry(column).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<(u32, f32)> = counts
        .into_iter()
        .map(|(column, count)| (column, count as f32 * idf[column as usize]))
        .collect();
    entries.sort_unstable_by_key(|&(column, _)| column);

    let norm = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for entry in &mut entries {
            entry.1 /= norm;
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::analysis::lemmatizer::SnowballLemmatizer;
    use crate::analysis::stopwords::StopWords;
    use crate::core::types::{FieldMap, FieldValue};

    fn normalizer() -> Normalizer {
        Normalizer::new(
            Arc::new(SnowballLemmatizer::russian()),
            StopWords::russian(),
            64,
        )
    }

    fn corpus_of(texts: &[&str]) -> Corpus {
        let fields = vec!["Текст".to_string()];
        let records = texts
            .iter()
            .map(|t| {
                let mut map = FieldMap::new();
                map.insert("Текст".to_string(), FieldValue::Text(t.to_string()));
                map
            })
            .collect();
        Corpus::from_records(records, &fields).unwrap()
    }

    #[test]
    fn test_rows_are_unit_length() {
        let normalizer = normalizer();
        let corpus = corpus_of(&["гора река зима"]);
        let index = VectorIndex::build(&corpus, &normalizer, 100);
        for row in index.rows() {
            let sum_sq: f32 = row.iter().map(|&(_, w)| w * w).sum();
            assert!((sum_sq - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_identical_documents_share_a_row() {
        let normalizer = normalizer();
        let corpus = corpus_of(&["гора река", "гора река"]);
        let index = VectorIndex::build(&corpus, &normalizer, 100);
        assert_eq!(index.rows()[0], index.rows()[1]);
    }

    #[test]
    fn test_smoothed_idf() {
        let normalizer = normalizer();
        let corpus = corpus_of(&["гора гора", "гора", "зима"]);
        let index = VectorIndex::build(&corpus, &normalizer, 100);

        let col_common = index.vocabulary().get("гор").unwrap() as usize;
        let col_rare = index.vocabulary().get("зим").unwrap() as usize;
        // N = 3: df 2 -> ln(4/3) + 1, df 1 -> ln(2) + 1
        assert!((index.idf()[col_common] - 1.287_682_1).abs() < 1e-5);
        assert!((index.idf()[col_rare] - 1.693_147_2).abs() < 1e-5);
        assert!(index.idf()[col_rare] > index.idf()[col_common]);
    }

    #[test]
    fn test_projection_matches_shared_terms_only() {
        let normalizer = normalizer();
        let corpus = corpus_of(&["гора река", "гора лес"]);
        let index = VectorIndex::build(&corpus, &normalizer, 100);

        let query = index.project(&normalizer, "река");
        assert_eq!(query.len(), 1);
        let col = index.vocabulary().get("рек").unwrap();
        assert_eq!(query[0].0, col);
        assert!((query[0].1 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_of_unknown_terms_is_empty() {
        let normalizer = normalizer();
        let corpus = corpus_of(&["гора река"]);
        let index = VectorIndex::build(&corpus, &normalizer, 100);
        assert!(index.project(&normalizer, "трактор").is_empty());
        assert!(index.project(&normalizer, "").is_empty());
    }
}
