//! Client Module
//!
//! Talks to the indexing/search service and reports results to the operator.
//!
//! ## Workflow
//! 1. **Snapshot**: Reads the index fields from the form once.
//! 2. **Validate**: Runs the validator on that snapshot; invalid input never reaches the network.
//! 3. **Build**: Generates a correlation ID and assembles the payload from the same snapshot.
//! 4. **Send**: One HTTP call, no retries, no timeout beyond the transport's own.
//! 5. **Report**: Pretty JSON or `Error: ...` goes to the output sink, then the form is reset.
//!
//! Search skips steps 1-2 and never resets anything.

pub mod service;
pub mod sink;
pub mod types;

#[cfg(test)]
mod tests;
