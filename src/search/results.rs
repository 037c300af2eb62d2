use serde::{Serialize, Deserialize};

use crate::core::types::FieldMap;

/// One ranked hit: the original record, its similarity to the query and a
/// highlighted excerpt around the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub fields: FieldMap,
    pub score: f32,
    pub excerpt: String,
}
