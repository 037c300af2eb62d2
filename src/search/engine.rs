use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::lemmatizer::{Lemmatizer, SnowballLemmatizer};
use crate::analysis::normalizer::Normalizer;
use crate::analysis::stopwords::StopWords;
use crate::core::config::EngineConfig;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::stats::EngineStats;
use crate::core::types::{Corpus, FieldMap};
use crate::index::tfidf::VectorIndex;
use crate::query::cache::{CacheKey, ResultCache};
use crate::scoring::similarity::cosine;
use crate::search::excerpt::ExcerptExtractor;
use crate::search::results::QueryResult;

/// Ranked search over a fixed corpus.
///
/// Construction does all the heavy work: the corpus is normalized and
/// vectorized once, after which the engine is immutable and can be shared
/// across threads behind an `Arc`. A corpus change means building a new
/// engine.
pub struct QueryEngine {
    corpus: Arc<Corpus>,
    index: Arc<VectorIndex>,
    normalizer: Arc<Normalizer>,
    extractor: ExcerptExtractor,
    cache: ResultCache,
    config: EngineConfig,
}

impl QueryEngine {
    /// Build an engine over the given records with the default Snowball
    /// lemmatizer.
    pub fn build(records: Vec<FieldMap>, config: EngineConfig) -> Result<Self> {
        Self::build_with_lemmatizer(records, config, Arc::new(SnowballLemmatizer::russian()))
    }

    /// Build an engine from a JSON array of records, the archive
    /// interchange format.
    pub fn build_from_json(json: &str, config: EngineConfig) -> Result<Self> {
        let records: Vec<FieldMap> = serde_json::from_str(json)
            .map_err(|e| Error::new(ErrorKind::InvalidCorpus, format!("corpus JSON: {}", e)))?;
        Self::build(records, config)
    }

    /// Build an engine with a caller-supplied lemmatizer.
    pub fn build_with_lemmatizer(
        records: Vec<FieldMap>,
        config: EngineConfig,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Result<Self> {
        let started = Instant::now();
        let corpus = Arc::new(Corpus::from_records(records, &config.search_fields)?);
        let normalizer = Arc::new(Normalizer::new(
            lemmatizer,
            StopWords::russian(),
            config.normalize_cache_size,
        ));
        let index = Arc::new(VectorIndex::build(&corpus, &normalizer, config.max_terms));

        tracing::info!(
            "query engine built: {} documents, {} vocabulary terms in {:?}",
            corpus.len(),
            index.vocabulary().len(),
            started.elapsed()
        );

        Ok(Self::assemble(corpus, index, normalizer, config))
    }

    /// Build an engine around a restored index instead of vectorizing the
    /// corpus again. The snapshot must describe exactly this corpus and
    /// must have been built with the default Snowball lemmatizer.
    pub fn with_index(
        records: Vec<FieldMap>,
        config: EngineConfig,
        index: VectorIndex,
    ) -> Result<Self> {
        Self::with_index_and_lemmatizer(
            records,
            config,
            index,
            Arc::new(SnowballLemmatizer::russian()),
        )
    }

    /// Restore around a snapshot built with a caller-supplied lemmatizer.
    /// Queries only project onto the snapshot's vocabulary when they are
    /// normalized by the same analyzer that built it.
    pub fn with_index_and_lemmatizer(
        records: Vec<FieldMap>,
        config: EngineConfig,
        index: VectorIndex,
        lemmatizer: Arc<dyn Lemmatizer>,
    ) -> Result<Self> {
        let corpus = Arc::new(Corpus::from_records(records, &config.search_fields)?);
        if index.doc_count() != corpus.len() {
            return Err(Error::new(
                ErrorKind::Snapshot,
                format!(
                    "snapshot holds {} documents but corpus has {}",
                    index.doc_count(),
                    corpus.len()
                ),
            ));
        }

        let normalizer = Arc::new(Normalizer::new(
            lemmatizer,
            StopWords::russian(),
            config.normalize_cache_size,
        ));

        tracing::info!(
            "query engine restored from snapshot: {} documents, {} vocabulary terms",
            corpus.len(),
            index.vocabulary().len()
        );

        Ok(Self::assemble(corpus, Arc::new(index), normalizer, config))
    }

    fn assemble(
        corpus: Arc<Corpus>,
        index: Arc<VectorIndex>,
        normalizer: Arc<Normalizer>,
        config: EngineConfig,
    ) -> Self {
        let extractor = ExcerptExtractor::new(normalizer.clone(), config.window_size);
        let cache = ResultCache::new(config.result_cache_size);
        QueryEngine {
            corpus,
            index,
            normalizer,
            extractor,
            cache,
            config,
        }
    }

    /// Rank the corpus against a query and return up to `top_n` results,
    /// best first. Equal scores fall back to corpus order, so the ranking
    /// is total and repeatable.
    ///
    /// A query that shares no vocabulary terms with the corpus returns no
    /// results rather than an arbitrary zero-scored ranking.
    pub fn search(&self, query: &str, top_n: usize) -> Vec<QueryResult> {
        if query.trim().is_empty() || top_n == 0 {
            return Vec::new();
        }

        let key = CacheKey {
            query: query.to_string(),
            top_n,
        };
        if let Some(results) = self.cache.get(&key) {
            tracing::debug!("result cache hit for {:?}", query);
            return results;
        }

        let projection = self.index.project(&self.normalizer, query);
        if projection.is_empty() {
            tracing::debug!("query {:?} projects onto no vocabulary terms", query);
            self.cache.put(key, Vec::new());
            return Vec::new();
        }

        let mut scored: Vec<(usize, f32)> = self
            .index
            .rows()
            .iter()
            .enumerate()
            .map(|(doc, row)| (doc, cosine(&projection, row)))
            .collect();
        scored.sort_unstable_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(top_n);

        let results: Vec<QueryResult> = scored
            .into_iter()
            .filter_map(|(doc, score)| {
                self.corpus.get(doc).map(|document| QueryResult {
                    fields: document.fields.clone(),
                    score,
                    excerpt: self.extractor.extract(&document.text, query),
                })
            })
            .collect();

        self.cache.put(key, results.clone());
        results
    }

    /// Search with the configured default result count.
    pub fn search_default(&self, query: &str) -> Vec<QueryResult> {
        self.search(query, self.config.top_n)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            document_count: self.corpus.len(),
            vocabulary_size: self.index.vocabulary().len(),
            result_cache: self.cache.stats(),
            normalization_cache: self.normalizer.cache_stats(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

// Derive is out of reach: the normalizer holds a trait object and a lock,
// neither of which is `Debug`. Report the engine's shape instead.
impl fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryEngine")
            .field("documents", &self.corpus.len())
            .field("vocabulary_terms", &self.index.vocabulary().len())
            .finish_non_exhaustive()
    }
}
