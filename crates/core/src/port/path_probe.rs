// Path Probe Port
// Filesystem existence check used as the fallback for sphinx/doc8

use async_trait::async_trait;
use std::path::Path;

/// Path probe trait
#[async_trait]
pub trait PathProbe: Send + Sync {
    /// True if something exists at `path`; any lookup error counts as absent
    async fn exists(&self, path: &Path) -> bool;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    /// In-memory set of existing paths
    #[derive(Clone, Default)]
    pub struct MockPathProbe {
        existing: Arc<Mutex<HashSet<PathBuf>>>,
        lookups: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl MockPathProbe {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_existing(paths: &[&str]) -> Self {
            let probe = Self::new();
            for path in paths {
                probe.add(path);
            }
            probe
        }

        pub fn add(&self, path: impl Into<PathBuf>) {
            self.existing.lock().unwrap().insert(path.into());
        }

        pub fn lookups(&self) -> Vec<PathBuf> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PathProbe for MockPathProbe {
        async fn exists(&self, path: &Path) -> bool {
            self.lookups.lock().unwrap().push(path.to_path_buf());
            self.existing.lock().unwrap().contains(path)
        }
    }
}
