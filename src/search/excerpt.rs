use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;

use crate::analysis::normalizer::{Normalizer, fold_case};
use crate::analysis::token::AnalyzedToken;

pub const HIGHLIGHT_OPEN: &str = "<span class='highlight'>";
pub const HIGHLIGHT_CLOSE: &str = "</span>";
pub const ELLIPSIS: &str = "...";

/// Cuts a window around the first query match in a document and wraps the
/// matching words in highlight markup.
///
/// All window arithmetic is in characters, not bytes; the folded copy of
/// the text keeps one character per original character so token offsets
/// carry over.
pub struct ExcerptExtractor {
    normalizer: Arc<Normalizer>,
    window_size: usize,
}

impl ExcerptExtractor {
    pub fn new(normalizer: Arc<Normalizer>, window_size: usize) -> Self {
        ExcerptExtractor {
            normalizer,
            window_size,
        }
    }

    /// Excerpt of `text` centered on the first occurrence of the earliest
    /// query lemma present, widened to whole words, with `...` marking cut
    /// edges. Falls back to the head of the text when nothing matches.
    pub fn extract(&self, text: &str, query: &str) -> String {
        if text.is_empty() || query.is_empty() {
            return String::new();
        }

        let chars: Vec<char> = text.chars().collect();
        let query_lemmas = self.normalizer.query_lemmas(query);
        if query_lemmas.is_empty() {
            return self.head_window(&chars);
        }

        let text_lower = fold_case(text);
        let tokens = self.normalizer.analyze(&text_lower);

        let Some(anchor) = find_anchor(&tokens, &query_lemmas) else {
            return self.head_window(&chars);
        };

        let (start, end) = window_bounds(&chars, anchor, self.window_size);
        let mut excerpt: String = chars[start..end].iter().collect();
        if start > 0 {
            excerpt.insert_str(0, ELLIPSIS);
        }
        if end < chars.len() {
            excerpt.push_str(ELLIPSIS);
        }

        let forms = matched_surface_forms(&tokens, &query_lemmas);
        highlight(&excerpt, &forms)
    }

    fn head_window(&self, chars: &[char]) -> String {
        if chars.len() <= self.window_size {
            return chars.iter().collect();
        }
        let mut excerpt: String = chars[..self.window_size].iter().collect();
        excerpt.push_str(ELLIPSIS);
        excerpt
    }
}

/// Character position of the first document token matching the earliest
/// query lemma that occurs in the document at all.
fn find_anchor(tokens: &[AnalyzedToken], query_lemmas: &[String]) -> Option<usize> {
    for lemma in query_lemmas {
        let hit = tokens
            .iter()
            .find(|t| t.kind.is_content() && &t.lemma == lemma);
        if let Some(token) = hit {
            return Some(token.offset);
        }
    }
    None
}

/// Window of `window` characters around the anchor, clamped to the text.
/// At the tail the window shifts back instead of shrinking. Each edge then
/// snaps outward to the nearest space on its side when one exists; with no
/// space in reach the mid-word cut stands, keeping the window near its
/// configured size.
fn window_bounds(chars: &[char], anchor: usize, window: usize) -> (usize, usize) {
    let total = chars.len();
    let mut start = anchor.saturating_sub(window / 2);
    let mut end = start + window;
    if end > total {
        end = total;
        start = end.saturating_sub(window);
    }

    if start > 0 {
        if let Some(space) = chars[..start].iter().rposition(|&c| c == ' ') {
            start = space + 1;
        }
    }
    if end < total {
        if let Some(space) = chars[end..].iter().position(|&c| c == ' ') {
            end += space;
        }
    }
    (start, end)
}

/// Distinct lowercased forms of document tokens whose lemma matches a
/// query lemma. Longest first, so the alternation prefers the longer form
/// when one is a prefix of another.
fn matched_surface_forms(tokens: &[AnalyzedToken], query_lemmas: &[String]) -> Vec<String> {
    let lemma_set: HashSet<&str> = query_lemmas.iter().map(String::as_str).collect();
    let mut distinct = HashSet::new();
    for token in tokens {
        if token.kind.is_content() && lemma_set.contains(token.lemma.as_str()) {
            distinct.insert(token.surface.clone());
        }
    }
    let mut forms: Vec<String> = distinct.into_iter().collect();
    forms.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    forms
}

/// Wrap every whole-word occurrence of a matched form. One pass over the
/// excerpt with a single alternation, so markup never nests.
fn highlight(excerpt: &str, forms: &[String]) -> String {
    if forms.is_empty() {
        return excerpt.to_string();
    }

    let escaped: Vec<String> = forms.iter().map(|f| regex::escape(f)).collect();
    let pattern = format!(r"(?i)\b(?:{})\b", escaped.join("|"));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(
                excerpt,
                format!("{}${{0}}{}", HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE),
            )
            .into_owned(),
        Err(e) => {
            tracing::warn!("highlight pattern failed to compile: {}", e);
            excerpt.to_string()
        }
    }
}
