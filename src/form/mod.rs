//! Form Module
//!
//! The boundary between the operator and the rest of the console.
//!
//! ## Overview
//! Validation and request building never touch concrete UI widgets. They go
//! through the [`port::FormPort`] capability, which can read a field, show or
//! hide an error next to it, and reset the whole surface.
//!
//! ## Submodules
//! - **`port`**: The `FormPort` trait and the `dashmap`-backed `MemoryForm`.
//! - **`types`**: Field identifiers and the `RawIndexInput` snapshot.

pub mod port;
pub mod types;
