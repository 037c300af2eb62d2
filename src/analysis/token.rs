use serde::{Serialize, Deserialize};

/// A text segment with its lemma.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub surface: String,   // The segment as it appears in the text
    pub lemma: String,     // Canonical form (equals surface for numbers)
    pub offset: usize,     // Character offset in the analyzed text
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Whitespace,
}

impl TokenKind {
    /// Word and Number tokens carry content; the rest are layout.
    pub fn is_content(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Number)
    }
}

impl AnalyzedToken {
    pub fn new(surface: String, lemma: String, offset: usize, kind: TokenKind) -> Self {
        AnalyzedToken {
            surface,
            lemma,
            offset,
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kinds() {
        assert!(TokenKind::Word.is_content());
        assert!(TokenKind::Number.is_content());
        assert!(!TokenKind::Punctuation.is_content());
        assert!(!TokenKind::Whitespace.is_content());
    }
}
