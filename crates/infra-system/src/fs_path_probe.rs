// Filesystem path probe
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use docprobe_core::port::PathProbe;

/// PathProbe backed by tokio::fs
pub struct FsPathProbe;

#[async_trait]
impl PathProbe for FsPathProbe {
    async fn exists(&self, path: &Path) -> bool {
        match tokio::fs::try_exists(path).await {
            Ok(exists) => exists,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Path lookup failed, treating as absent");
                false
            }
        }
    }
}
