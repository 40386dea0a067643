// Central Error Type for the probe

use thiserror::Error;

use crate::application::CommandFailure;

/// Probe-level error type
#[derive(Error, Debug, Clone)]
pub enum ProbeError {
    /// Version probe ran but printed something other than 2 or 3
    #[error("Could not get python version (probe printed {output:?})")]
    UnsupportedVersion { output: String },

    /// Interpreter invocation failed while detecting the version
    #[error("Command error: {0}")]
    Command(#[from] CommandFailure),

    /// Setup sequence ended in the failed state
    #[error("Probe setup failed: {0}")]
    SetupFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias using ProbeError
pub type Result<T> = std::result::Result<T, ProbeError>;
