use crate::validation::types::ValidationResult;
use serde::{Deserialize, Serialize};

/// Lifecycle of an index submission.
///
/// `Invalid`, `Succeeded` and `Failed` are terminal; each returns the surface
/// to `Idle`. There is no retry state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid,
    Submitting,
    Succeeded,
    Failed,
}

/// Terminal result of one index submission.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexOutcome {
    /// Blocked before any network call.
    Invalid(ValidationResult),
    /// The service answered with JSON (any status code).
    Succeeded(serde_json::Value),
    /// Transport failure or non-JSON body; holds the text written to the sink.
    Failed(String),
}

impl IndexOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            IndexOutcome::Invalid(_) => SubmissionState::Invalid,
            IndexOutcome::Succeeded(_) => SubmissionState::Succeeded,
            IndexOutcome::Failed(_) => SubmissionState::Failed,
        }
    }
}

/// Terminal result of one search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Succeeded(serde_json::Value),
    Failed(String),
}

impl SearchOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            SearchOutcome::Succeeded(_) => SubmissionState::Succeeded,
            SearchOutcome::Failed(_) => SubmissionState::Failed,
        }
    }
}
