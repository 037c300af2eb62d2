use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{AnalyzedToken, TokenKind};

/// Produces lemmas for a text.
///
/// The default implementation stems with Snowball. Deployments backed by a
/// full morphological analyzer implement this trait over it instead; the
/// rest of the engine only sees lemmas.
///
/// Callers lowercase the text first. Offsets are character positions in
/// the text exactly as given, so the caller can map tokens back onto it.
pub trait Lemmatizer: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;
    fn name(&self) -> &str;
}

/// Snowball-stemming lemmatizer: the stem stands in for the lemma.
pub struct SnowballLemmatizer {
    pub algorithm: Algorithm,
}

impl SnowballLemmatizer {
    pub fn new(algorithm: Algorithm) -> Self {
        SnowballLemmatizer { algorithm }
    }

    pub fn russian() -> Self {
        SnowballLemmatizer::new(Algorithm::Russian)
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let stemmer = Stemmer::create(self.algorithm);

        let mut tokens = Vec::new();
        let mut offset = 0usize;
        for segment in text.split_word_bounds() {
            let kind = classify(segment);
            let lemma = match kind {
                TokenKind::Word => stemmer.stem(segment).to_string(),
                _ => segment.to_string(),
            };
            tokens.push(AnalyzedToken::new(segment.to_string(), lemma, offset, kind));
            offset += segment.chars().count();
        }
        tokens
    }

    fn name(&self) -> &str {
        "snowball"
    }
}

fn classify(segment: &str) -> TokenKind {
    match segment.chars().next() {
        Some(c) if c.is_alphabetic() => TokenKind::Word,
        Some(c) if c.is_numeric() => TokenKind::Number,
        Some(c) if c.is_whitespace() => TokenKind::Whitespace,
        _ => TokenKind::Punctuation,
    }
}
