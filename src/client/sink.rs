use std::sync::{Arc, Mutex};

/// A single text region holding the most recent result or error.
///
/// Every write replaces the previous content.
pub trait OutputSink: Send + Sync {
    fn write(&self, text: String);
}

/// In-memory sink shared between clones.
#[derive(Clone, Default)]
pub struct SharedOutput {
    latest: Arc<Mutex<Option<String>>>,
}

impl SharedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last text written, if any.
    pub fn latest(&self) -> Option<String> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OutputSink for SharedOutput {
    fn write(&self, text: String) {
        *self
            .latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(text);
    }
}

/// Prints each result to standard output.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write(&self, text: String) {
        println!("{}", text);
    }
}
