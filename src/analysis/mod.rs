pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;
pub mod token;
