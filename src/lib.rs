//! Search Console Library
//!
//! Client-side boundary between a human operator and the `/index` and
//! `/search` endpoints of an indexing/search service. The binaries
//! (`main.rs` for the terminal, `ui/` for the browser) are thin shells over it.
//!
//! ## Modules
//! - **`form`**: The `FormPort` capability over the operator's input surface.
//! - **`validation`**: Rules deciding whether an index submission may proceed.
//! - **`request`**: Correlation IDs, list normalization and payload assembly.
//! - **`client`**: The HTTP round trip and the output sink.
//! - **`config`**: Environment-driven settings shared by both binaries.

pub mod client;
pub mod config;
pub mod form;
pub mod request;
pub mod validation;
