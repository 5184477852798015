//! Request Module
//!
//! Turns raw operator input into the payloads the indexing/search service expects.
//!
//! ## Submodules
//! - **`id`**: Correlation IDs for index submissions.
//! - **`builder`**: List normalization and payload assembly.
//! - **`types`**: Wire-level DTOs for `/index` and `/search`.

pub mod builder;
pub mod id;
pub mod types;
