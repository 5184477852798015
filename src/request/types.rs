//! Service Wire Types
//!
//! Payloads exchanged with the indexing/search service. These structures are
//! created fresh per operator action, sent once and dropped.

use serde::{Deserialize, Serialize};

/// Endpoint accepting document submissions (POST, JSON body).
pub const ENDPOINT_INDEX: &str = "/index";
/// Endpoint answering multi-term queries (GET, repeated `query` parameters).
pub const ENDPOINT_SEARCH: &str = "/search";

/// Body of a `POST /index` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRequest {
    /// Client-generated correlation ID, see [`super::id::generate_id`].
    pub id: String,
    pub content: IndexContent,
    /// Terms excluded from indexing for this document.
    pub stop_words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexContent {
    /// Free text, sent verbatim (possibly empty).
    pub string: String,
    /// Structured document, or `null` when none was supplied.
    pub object: Option<serde_json::Value>,
    /// Field paths of `object` to index. Always present, even with a `null` object.
    pub object_indexes: Vec<String>,
}

/// Terms of a `GET /search` call, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub queries: Vec<String>,
}
