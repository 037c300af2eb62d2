use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::analysis::stopwords::StopWords;
use crate::analysis::token::AnalyzedToken;
use crate::core::stats::CacheStats;

/// Lowercase a text one character at a time.
///
/// `str::to_lowercase` can change the character count for a handful of
/// scripts; excerpt offsets require the folded text to stay aligned with
/// the original, so folding keeps one output character per input character.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Normalization front end shared by indexing, query projection and
/// excerpt extraction.
///
/// A text is cleaned, lowercased and lemmatized; stop words and
/// single-character tokens are dropped and the surviving lemmas are joined
/// by single spaces. Results are memoized by exact input in a bounded LRU,
/// since the same texts are re-normalized across rebuilds and repeated
/// queries.
pub struct Normalizer {
    lemmatizer: Arc<dyn Lemmatizer>,
    stop_words: StopWords,
    cache: Mutex<LruCache<String, String>>,
    cache_capacity: usize,
    hit_count: AtomicUsize,
    miss_count: AtomicUsize,
}

impl Normalizer {
    pub fn new(
        lemmatizer: Arc<dyn Lemmatizer>,
        stop_words: StopWords,
        cache_capacity: usize,
    ) -> Self {
        let cap = NonZeroUsize::new(cache_capacity).unwrap();
        Normalizer {
            lemmatizer,
            stop_words,
            cache: Mutex::new(LruCache::new(cap)),
            cache_capacity,
            hit_count: AtomicUsize::new(0),
            miss_count: AtomicUsize::new(0),
        }
    }

    /// Normalized form of a text: space-joined lemmas of its content words.
    pub fn normalize(&self, text: &str) -> String {
        if let Some(cached) = self.cache.lock().get(text) {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
            return cached.clone();
        }
        self.miss_count.fetch_add(1, Ordering::Relaxed);

        let normalized = self.normalize_uncached(text);
        self.cache
            .lock()
            .put(text.to_string(), normalized.clone());
        normalized
    }

    fn normalize_uncached(&self, text: &str) -> String {
        let cleaned = clean(text);
        let tokens = self.lemmatizer.analyze(&cleaned);

        let mut lemmas = Vec::new();
        for token in &tokens {
            if !token.kind.is_content() {
                continue;
            }
            if token.surface.chars().count() < 2 {
                continue;
            }
            if self.stop_words.contains(&token.surface) {
                continue;
            }
            lemmas.push(token.lemma.clone());
        }
        lemmas.join(" ")
    }

    /// Distinct query lemmas in first-occurrence order.
    pub fn query_lemmas(&self, query: &str) -> Vec<String> {
        let normalized = self.normalize(query);
        let mut seen = HashSet::new();
        let mut lemmas = Vec::new();
        for lemma in normalized.split_whitespace() {
            if seen.insert(lemma) {
                lemmas.push(lemma.to_string());
            }
        }
        lemmas
    }

    /// Raw token stream for a text, offsets intact.
    pub fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        self.lemmatizer.analyze(text)
    }

    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            size: self.cache.lock().len(),
            capacity: self.cache_capacity,
        }
    }
}

/// Remove carriage returns and angle brackets outright, drop everything
/// outside letters, digits and underscore, collapse whitespace runs to
/// single spaces, trim, and lowercase.
fn clean(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c == '\r' || c == '<' || c == '>' {
            continue;
        }
        if c.is_whitespace() {
            if !out.is_empty() {
                pending_space = true;
            }
            continue;
        }
        if c.is_alphanumeric() || c == '_' {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            for lc in c.to_lowercase() {
                out.push(lc);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lemmatizer::SnowballLemmatizer;

    fn russian_normalizer() -> Normalizer {
        Normalizer::new(
            Arc::new(SnowballLemmatizer::russian()),
            StopWords::russian(),
            16,
        )
    }

    struct CountingLemmatizer {
        inner: SnowballLemmatizer,
        calls: AtomicUsize,
    }

    impl Lemmatizer for CountingLemmatizer {
        fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.analyze(text)
        }

        fn name(&self) -> &str {
            "counting"
        }
    }

    #[test]
    fn test_clean_strips_markup_and_collapses_whitespace() {
        assert_eq!(clean("Красная\r\n<площадь>,  зимой!"), "красная площадь зимой");
        assert_eq!(clean("  окраина  "), "окраина");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn test_normalize_lemmatizes_content_words() {
        let normalizer = russian_normalizer();
        assert_eq!(
            normalizer.normalize("Красная площадь зимой"),
            "красн площад зим"
        );
    }

    #[test]
    fn test_normalize_drops_stop_words_and_short_tokens() {
        let normalizer = russian_normalizer();
        assert_eq!(normalizer.normalize("я и он на площади"), "площад");
    }

    #[test]
    fn test_normalize_memoizes_by_exact_input() {
        let counting = Arc::new(CountingLemmatizer {
            inner: SnowballLemmatizer::russian(),
            calls: AtomicUsize::new(0),
        });
        let normalizer = Normalizer::new(counting.clone(), StopWords::russian(), 16);

        let first = normalizer.normalize("Красная площадь");
        let second = normalizer.normalize("Красная площадь");
        assert_eq!(first, second);
        assert_eq!(counting.calls.load(Ordering::SeqCst), 1);

        let stats = normalizer.cache_stats();
        assert_eq!(stats.hit_count, 1);
        assert_eq!(stats.miss_count, 1);
        assert_eq!(stats.size, 1);
    }

    #[test]
    fn test_cache_evicts_beyond_capacity() {
        let normalizer = Normalizer::new(
            Arc::new(SnowballLemmatizer::russian()),
            StopWords::russian(),
            2,
        );
        normalizer.normalize("первый текст");
        normalizer.normalize("второй текст");
        normalizer.normalize("третий текст");
        assert_eq!(normalizer.cache_stats().size, 2);
    }

    #[test]
    fn test_query_lemmas_distinct_in_order() {
        let normalizer = russian_normalizer();
        let lemmas = normalizer.query_lemmas("площадь на площади Москва");
        assert_eq!(lemmas, vec!["площад".to_string(), "москв".to_string()]);
    }

    #[test]
    fn test_fold_case_keeps_char_count() {
        let folded = fold_case("Красная Площадь");
        assert_eq!(folded, "красная площадь");
        assert_eq!(folded.chars().count(), "Красная Площадь".chars().count());
    }
}
