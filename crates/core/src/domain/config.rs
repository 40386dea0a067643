// Probe configuration

use std::path::PathBuf;

use crate::error::ProbeError;

/// Default interpreter when nothing is configured
pub const DEFAULT_PYTHON_PATH: &str = "python";

/// Where to find the interpreter and the optional tool executables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Interpreter executable (name on PATH or absolute path)
    pub python_path: String,
    /// sphinx-build executable, accepted when `import sphinx` fails
    pub sphinx_path: Option<PathBuf>,
    /// doc8 executable, accepted when `import doc8.main` fails
    pub linter_path: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            python_path: DEFAULT_PYTHON_PATH.to_string(),
            sphinx_path: None,
            linter_path: None,
        }
    }
}

impl ProbeConfig {
    pub fn new(python_path: impl Into<String>) -> Self {
        Self {
            python_path: python_path.into(),
            ..Default::default()
        }
    }

    pub fn with_sphinx_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.sphinx_path = Some(path.into());
        self
    }

    pub fn with_linter_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.linter_path = Some(path.into());
        self
    }

    /// Configured fallback path for a tool, if any
    pub fn fallback_path(&self, tool: super::OptionalTool) -> Option<&PathBuf> {
        match tool {
            super::OptionalTool::Docutils => None,
            super::OptionalTool::Sphinx => self.sphinx_path.as_ref(),
            super::OptionalTool::Doc8 => self.linter_path.as_ref(),
        }
    }

    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.python_path.trim().is_empty() {
            return Err(ProbeError::Config(
                "python path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
