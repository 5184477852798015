use super::types::*;
use crate::form::port::FormPort;
use crate::form::types::{Field, RawIndexInput};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Parses free-form JSON with no nesting limit.
///
/// Deep documents recurse on a growing stack instead of hitting
/// serde_json's default depth of 128.
pub fn parse_json(text: &str) -> serde_json::Result<serde_json::Value> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = serde_json::Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Checks an index submission snapshot. Pure: the same input always yields
/// the same result.
pub fn validate(input: &RawIndexInput) -> ValidationResult {
    let mut field_errors = BTreeMap::new();

    let content_string = input.content_string.trim();
    let content_object = input.content_object.trim();
    let object_indexes = input.object_indexes.trim();

    if content_string.is_empty() && content_object.is_empty() {
        field_errors.insert(Field::ContentString, CONTENT_REQUIRED.to_string());
        field_errors.insert(Field::ContentObject, CONTENT_REQUIRED.to_string());
    }

    if !content_object.is_empty() {
        if let Err(err) = parse_json(content_object) {
            tracing::debug!("Content object rejected: {}", err);
            field_errors.insert(Field::ContentObject, OBJECT_INVALID_JSON.to_string());
        }

        if object_indexes.is_empty() {
            field_errors.insert(Field::ObjectIndexes, INDEXES_REQUIRED.to_string());
        }
    }

    ValidationResult {
        is_valid: field_errors.is_empty(),
        field_errors,
    }
}

/// Validates `input` and mirrors the outcome onto `form`.
///
/// Prior error state is cleared first so the form reflects only this attempt.
pub fn validate_form(form: &dyn FormPort, input: &RawIndexInput) -> ValidationResult {
    form.clear_errors();

    let result = validate(input);
    for (field, message) in &result.field_errors {
        form.set_error(*field, Some(message.clone()));
    }

    if !result.is_valid {
        tracing::warn!(
            "Index submission rejected: {} field error(s)",
            result.field_errors.len()
        );
    }

    result
}
