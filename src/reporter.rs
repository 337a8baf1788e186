use std::sync::{Arc, Mutex};

/// Destination for human-readable status and error messages.
///
/// The pipeline reports through this trait instead of printing directly, so
/// tests can capture messages rather than scraping process output.
pub trait Reporter {
    fn report(&self, message: &str);
}

/// Prints every message to stdout. Used by the binary.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, message: &str) {
        println!("{}", message);
    }
}

/// Collects messages into a shared buffer for assertions.
#[derive(Debug, Clone, Default)]
pub struct CapturingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }

    /// True when any captured message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl Reporter for CapturingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
