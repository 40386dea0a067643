// Log Sink Port
// Narrow logging capability handed to the probe by the host

/// Opaque sink accepting message strings
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Keeps every logged line
    #[derive(Clone, Default)]
    pub struct MemoryLogSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl MemoryLogSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines.lock().unwrap().iter().any(|l| l.contains(needle))
        }
    }

    impl LogSink for MemoryLogSink {
        fn log(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }
}
