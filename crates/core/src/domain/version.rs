// Interpreter major version

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ProbeError;

/// Python major version supported by the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PythonVersion {
    Two,
    Three,
}

impl PythonVersion {
    /// Parse the captured stdout of the version one-liner.
    ///
    /// Surrounding whitespace (the trailing newline from `print`) is ignored.
    /// Anything that is not the integer 2 or 3 is rejected.
    ///
    /// # Example
    /// ```
    /// use docprobe_core::domain::PythonVersion;
    ///
    /// assert_eq!(PythonVersion::from_probe_output("3\n").unwrap(), PythonVersion::Three);
    /// assert!(PythonVersion::from_probe_output("abc").is_err());
    /// ```
    pub fn from_probe_output(output: &str) -> Result<Self, ProbeError> {
        let unsupported = || ProbeError::UnsupportedVersion {
            output: output.to_string(),
        };

        let major: i64 = output.trim().parse().map_err(|_| unsupported())?;
        match major {
            2 => Ok(PythonVersion::Two),
            3 => Ok(PythonVersion::Three),
            _ => Err(unsupported()),
        }
    }

    pub fn major(&self) -> u8 {
        match self {
            PythonVersion::Two => 2,
            PythonVersion::Three => 3,
        }
    }
}

impl From<PythonVersion> for u8 {
    fn from(version: PythonVersion) -> Self {
        version.major()
    }
}

impl TryFrom<u8> for PythonVersion {
    type Error = String;

    fn try_from(major: u8) -> Result<Self, Self::Error> {
        match major {
            2 => Ok(PythonVersion::Two),
            3 => Ok(PythonVersion::Three),
            other => Err(format!("unsupported python major version: {}", other)),
        }
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major())
    }
}
