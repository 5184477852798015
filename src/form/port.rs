//! Form Capability
//!
//! Abstracts the input surface so the validator and the submission flow can
//! run without a rendering environment (CLI, web console, tests).

use super::types::Field;

use dashmap::DashMap;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Capability interface over an operator-facing input surface.
///
/// Methods take `&self`: nothing prevents two submissions from sharing one
/// surface, and implementations are expected to tolerate that.
pub trait FormPort: Send + Sync {
    /// Returns the current text of a field. Unknown or unset fields read as `""`.
    fn read(&self, field: Field) -> String;

    /// Replaces the text of a field.
    fn write(&self, field: Field, value: &str);

    /// Shows `message` next to `field`, or hides the error when `None`.
    fn set_error(&self, field: Field, message: Option<String>);

    /// Hides every error message and removes every invalid marking.
    fn clear_errors(&self);

    /// Closes the submission surface: clears values and error state.
    fn reset(&self);
}

/// In-memory form backed by concurrent maps.
#[derive(Clone, Default)]
pub struct MemoryForm {
    values: Arc<DashMap<Field, String>>,
    errors: Arc<DashMap<Field, String>>,
}

impl MemoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the errors currently shown, ordered by field.
    pub fn errors(&self) -> BTreeMap<Field, String> {
        self.errors
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect()
    }

    #[cfg(test)]
    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(|e| e.value().clone())
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(|entry| entry.value().is_empty())
    }
}

impl FormPort for MemoryForm {
    fn read(&self, field: Field) -> String {
        self.values
            .get(&field)
            .map(|v| v.value().clone())
            .unwrap_or_default()
    }

    fn write(&self, field: Field, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn set_error(&self, field: Field, message: Option<String>) {
        match message {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    fn clear_errors(&self) {
        self.errors.clear();
    }

    fn reset(&self) {
        self.values.clear();
        self.errors.clear();
        tracing::debug!("Form reset");
    }
}
