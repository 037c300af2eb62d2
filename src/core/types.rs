use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use crate::core::error::{Error, ErrorKind, Result};

/// A single field value as it appears in a corpus record.
///
/// Records are JSON-shaped mappings; values are free-form strings, lists of
/// strings, numbers or booleans. Everything renders to text for indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Textual form of the value; list entries are space-joined.
    pub fn as_text(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(" "),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

pub type FieldMap = HashMap<String, FieldValue>;

/// A corpus document: its raw field mapping plus the derived text that
/// normalization and excerpt extraction read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub fields: FieldMap,
    pub text: String,
}

impl Document {
    /// Derive a document from a record: the configured search fields, in
    /// configured order, rendered and joined by single spaces. Absent
    /// fields are skipped.
    pub fn from_record(fields: FieldMap, search_fields: &[String]) -> Self {
        let mut parts = Vec::new();
        for name in search_fields {
            if let Some(value) = fields.get(name) {
                let text = value.as_text();
                if !text.is_empty() {
                    parts.push(text);
                }
            }
        }
        Document {
            fields,
            text: parts.join(" "),
        }
    }
}

/// The fixed, ordered collection of documents being searched.
///
/// Position in the corpus is the document identifier: it is the canonical
/// tie-break order for equal scores and the lookup key for excerpt sources.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Build a corpus from externally loaded records.
    ///
    /// The record list must be non-empty; an empty corpus is a fatal
    /// configuration error, not something the engine can serve from.
    pub fn from_records(records: Vec<FieldMap>, search_fields: &[String]) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidCorpus,
                "corpus must be a non-empty sequence of field mappings".to_string(),
            ));
        }

        let documents = records
            .into_iter()
            .map(|fields| Document::from_record(fields, search_fields))
            .collect();

        Ok(Corpus { documents })
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, FieldValue)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_field_value_rendering() {
        assert_eq!(FieldValue::Text("абв".into()).as_text(), "абв");
        assert_eq!(
            FieldValue::List(vec!["а".into(), "б".into()]).as_text(),
            "а б"
        );
        assert_eq!(FieldValue::Number(1870.0).as_text(), "1870");
        assert_eq!(FieldValue::Number(3.5).as_text(), "3.5");
        assert_eq!(FieldValue::Bool(true).as_text(), "true");
    }

    #[test]
    fn test_field_value_untagged_json() {
        let map: FieldMap = serde_json::from_str(
            r#"{"Текст": "письмо", "Локация": ["Москва", "Тверь"], "Год": 1870}"#,
        )
        .unwrap();
        assert_eq!(map["Текст"], FieldValue::Text("письмо".into()));
        assert_eq!(
            map["Локация"],
            FieldValue::List(vec!["Москва".into(), "Тверь".into()])
        );
        assert_eq!(map["Год"], FieldValue::Number(1870.0));
    }

    #[test]
    fn test_document_text_follows_configured_field_order() {
        let search_fields = vec!["Название".to_string(), "Текст".to_string()];
        let doc = Document::from_record(
            fields(&[
                ("Текст", FieldValue::Text("тело письма".into())),
                ("Название", FieldValue::Text("заголовок".into())),
                ("Служебное", FieldValue::Text("не индексируется".into())),
            ]),
            &search_fields,
        );
        assert_eq!(doc.text, "заголовок тело письма");
    }

    #[test]
    fn test_document_skips_absent_fields() {
        let search_fields = vec!["Название".to_string(), "Текст".to_string()];
        let doc = Document::from_record(
            fields(&[("Текст", FieldValue::Text("только тело".into()))]),
            &search_fields,
        );
        assert_eq!(doc.text, "только тело");
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let err = Corpus::from_records(Vec::new(), &[]).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidCorpus));
    }

    #[test]
    fn test_corpus_preserves_record_order() {
        let search_fields = vec!["Текст".to_string()];
        let corpus = Corpus::from_records(
            vec![
                fields(&[("Текст", FieldValue::Text("первый".into()))]),
                fields(&[("Текст", FieldValue::Text("второй".into()))]),
            ],
            &search_fields,
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.get(0).unwrap().text, "первый");
        assert_eq!(corpus.get(1).unwrap().text, "второй");
    }
}
