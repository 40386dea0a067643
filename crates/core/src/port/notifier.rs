// User-facing warning channel

/// Receives one message per optional tool judged absent
pub trait WarningNotifier: Send + Sync {
    fn show_warning(&self, message: &str);
}

/// Notifier that drops every warning (headless hosts)
pub struct SilentNotifier;

impl WarningNotifier for SilentNotifier {
    fn show_warning(&self, _message: &str) {}
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records warnings in order
    #[derive(Clone, Default)]
    pub struct RecordingNotifier {
        warnings: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.warnings.lock().unwrap().clone()
        }

        /// How many times this exact message was shown
        pub fn count(&self, message: &str) -> usize {
            self.warnings
                .lock()
                .unwrap()
                .iter()
                .filter(|w| w.as_str() == message)
                .count()
        }
    }

    impl WarningNotifier for RecordingNotifier {
        fn show_warning(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }
}
