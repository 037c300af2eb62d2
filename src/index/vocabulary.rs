use std::collections::{HashMap, HashSet};
use serde::{Serialize, Deserialize};

const MAX_NGRAM: usize = 3;

/// Word n-grams (n = 1..=3) of a normalized text: unigrams in text order,
/// then bigrams, then trigrams.
pub fn ngram_terms(normalized: &str) -> Vec<String> {
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut terms = Vec::new();
    for n in 1..=MAX_NGRAM {
        if tokens.len() < n {
            break;
        }
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

/// Fixed term-to-column mapping over the corpus n-grams.
///
/// When the candidate set exceeds `max_terms`, terms are kept by document
/// frequency, ties broken by first encounter in corpus order. Column
/// numbers follow that same ranking, so two builds over the same corpus
/// produce identical vocabularies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: HashMap<String, u32>,
    document_frequencies: Vec<u32>,
}

impl Vocabulary {
    pub fn build(normalized_docs: &[String], max_terms: usize) -> Self {
        // df plus first-encounter rank per candidate term
        let mut stats: HashMap<String, (u32, usize)> = HashMap::new();
        let mut next_rank = 0usize;

        for doc in normalized_docs {
            let mut seen_in_doc: HashSet<String> = HashSet::new();
            for term in ngram_terms(doc) {
                if !seen_in_doc.insert(term.clone()) {
                    continue;
                }
                let entry = stats.entry(term).or_insert_with(|| {
                    let rank = next_rank;
                    next_rank += 1;
                    (0, rank)
                });
                entry.0 += 1;
            }
        }

        let mut ranked: Vec<(String, u32, usize)> = stats
            .into_iter()
            .map(|(term, (df, rank))| (term, df, rank))
            .collect();
        ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        ranked.truncate(max_terms);

        let mut terms = HashMap::with_capacity(ranked.len());
        let mut document_frequencies = Vec::with_capacity(ranked.len());
        for (column, (term, df, _)) in ranked.into_iter().enumerate() {
            terms.insert(term, column as u32);
            document_frequencies.push(df);
        }

        Vocabulary {
            terms,
            document_frequencies,
        }
    }

    /// Column index for a term, if it made the vocabulary.
    pub fn get(&self, term: &str) -> Option<u32> {
        self.terms.get(term).copied()
    }

    pub fn document_frequencies(&self) -> &[u32] {
        &self.document_frequencies
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ngram_terms_order() {
        let terms = ngram_terms("красн площад зим");
        assert_eq!(
            terms,
            vec![
                "красн",
                "площад",
                "зим",
                "красн площад",
                "площад зим",
                "красн площад зим",
            ]
        );
    }

    #[test]
    fn test_ngram_terms_short_text() {
        assert_eq!(ngram_terms("красн"), vec!["красн"]);
        assert!(ngram_terms("").is_empty());
    }

    #[test]
    fn test_document_frequency_counts_distinct_per_doc() {
        let docs = vec!["aa aa aa".to_string(), "aa bb".to_string()];
        let vocabulary = Vocabulary::build(&docs, 100);
        let aa = vocabulary.get("aa").unwrap() as usize;
        let bb = vocabulary.get("bb").unwrap() as usize;
        assert_eq!(vocabulary.document_frequencies()[aa], 2);
        assert_eq!(vocabulary.document_frequencies()[bb], 1);
    }

    #[test]
    fn test_cap_keeps_frequent_terms_first_seen_breaking_ties() {
        let docs = vec![
            "aa bb".to_string(),
            "aa cc".to_string(),
            "aa bb".to_string(),
        ];
        // df: aa=3, bb=2, "aa bb"=2, cc=1, "aa cc"=1
        let vocabulary = Vocabulary::build(&docs, 2);
        assert_eq!(vocabulary.len(), 2);
        assert_eq!(vocabulary.get("aa"), Some(0));
        assert_eq!(vocabulary.get("bb"), Some(1));
        assert_eq!(vocabulary.get("aa bb"), None);
        assert_eq!(vocabulary.get("cc"), None);
    }

    #[test]
    fn test_build_is_deterministic() {
        let docs = vec![
            "зима снег моро".to_string(),
            "моро река лед".to_string(),
            "лед зима поле".to_string(),
        ];
        let a = Vocabulary::build(&docs, 5);
        let b = Vocabulary::build(&docs, 5);
        assert_eq!(a, b);
    }
}
