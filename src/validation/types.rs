use crate::form::types::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CONTENT_REQUIRED: &str = "Content String or Content Object is required. At least one.";
pub const OBJECT_INVALID_JSON: &str = "Content Object must be a valid JSON.";
pub const INDEXES_REQUIRED: &str = "Indexes are required.";

/// Outcome of validating one `RawIndexInput`.
///
/// A field without an entry in `field_errors` is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub field_errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }
}
