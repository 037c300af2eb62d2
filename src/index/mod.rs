pub mod snapshot;
pub mod tfidf;
pub mod vocabulary;
