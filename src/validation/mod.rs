//! Validation Module
//!
//! Decides whether an index submission may proceed.
//!
//! ## Rules
//! - **Content**: at least one of content string / content object must be non-blank.
//! - **Object**: a non-blank content object must parse as JSON.
//! - **Indexes**: a non-blank content object requires a non-blank index list.
//!
//! All rules run on every attempt, so one submission can collect several
//! messages at once.

pub mod types;
pub mod validator;
