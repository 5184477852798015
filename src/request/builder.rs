use super::types::{IndexContent, IndexRequest, SearchQuery};
use crate::form::types::RawIndexInput;
use crate::validation::validator::parse_json;
use anyhow::{Context, Result};

/// Separator for every list-valued field (indexes, stop words, queries).
pub const LIST_SEPARATOR: char = ',';

/// Splits a comma-separated list and trims each entry.
///
/// Entries are never dropped, so `""` yields `[""]` and `"a,,b"` yields
/// `["a", "", "b"]`.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(LIST_SEPARATOR)
        .map(|item| item.trim().to_string())
        .collect()
}

/// Assembles the `/index` payload from an already validated snapshot.
///
/// Fails only if `content_object` is not JSON, which validation rules out.
pub fn build_index_request(id: String, input: &RawIndexInput) -> Result<IndexRequest> {
    let object_text = input.content_object.trim();
    let object = if object_text.is_empty() {
        None
    } else {
        Some(parse_json(object_text).context("Content object is not valid JSON")?)
    };

    Ok(IndexRequest {
        id,
        content: IndexContent {
            string: input.content_string.clone(),
            object,
            object_indexes: split_list(&input.object_indexes),
        },
        stop_words: split_list(&input.stop_words),
    })
}

impl SearchQuery {
    pub fn from_text(query_strings: &str) -> Self {
        Self {
            queries: split_list(query_strings),
        }
    }

    /// Renders `query=<q1>&query=<q2>...`.
    ///
    /// Terms are not percent-encoded here; whatever the transport's URL parser
    /// does to them is all the escaping they get.
    pub fn query_string(&self) -> String {
        self.queries
            .iter()
            .map(|query| format!("query={}", query))
            .collect::<Vec<_>>()
            .join("&")
    }
}
