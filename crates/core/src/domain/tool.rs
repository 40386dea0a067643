// Optional documentation tools checked by the probe

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Optional package whose absence degrades features but never blocks readiness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionalTool {
    Docutils,
    Sphinx,
    Doc8,
}

impl OptionalTool {
    /// Check order used by the setup sequence
    pub const ALL: [OptionalTool; 3] = [
        OptionalTool::Docutils,
        OptionalTool::Sphinx,
        OptionalTool::Doc8,
    ];

    /// Python one-liner that succeeds only if the package is importable
    pub fn import_statement(&self) -> &'static str {
        match self {
            OptionalTool::Docutils => "import docutils",
            OptionalTool::Sphinx => "import sphinx",
            OptionalTool::Doc8 => "import doc8.main",
        }
    }

    /// Warning shown to the user when the tool is judged absent
    pub fn warning_message(&self) -> &'static str {
        match self {
            OptionalTool::Docutils => "Previewer docutils cannot be found.",
            OptionalTool::Sphinx => "Previewer sphinx-build cannot be found.",
            OptionalTool::Doc8 => "Linter doc8 cannot be found.",
        }
    }

    /// Whether a configured executable path can stand in for the package
    pub fn accepts_fallback_path(&self) -> bool {
        !matches!(self, OptionalTool::Docutils)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionalTool::Docutils => "docutils",
            OptionalTool::Sphinx => "sphinx",
            OptionalTool::Doc8 => "doc8",
        }
    }
}

impl fmt::Display for OptionalTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of checking one optional tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum ToolStatus {
    /// Package imports cleanly in the interpreter
    Importable,
    /// Import failed but the configured tool path exists on disk
    FallbackPath(PathBuf),
    Missing,
}

impl ToolStatus {
    pub fn is_available(&self) -> bool {
        !matches!(self, ToolStatus::Missing)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Importable => f.write_str("importable"),
            ToolStatus::FallbackPath(path) => write!(f, "found at {}", path.display()),
            ToolStatus::Missing => f.write_str("missing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_order() {
        assert_eq!(
            OptionalTool::ALL,
            [OptionalTool::Docutils, OptionalTool::Sphinx, OptionalTool::Doc8]
        );
    }

    #[test]
    fn test_only_docutils_rejects_fallback_path() {
        assert!(!OptionalTool::Docutils.accepts_fallback_path());
        assert!(OptionalTool::Sphinx.accepts_fallback_path());
        assert!(OptionalTool::Doc8.accepts_fallback_path());
    }

    #[test]
    fn test_doc8_imports_main_module() {
        assert_eq!(OptionalTool::Doc8.import_statement(), "import doc8.main");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_value(ToolStatus::FallbackPath("/usr/bin/doc8".into())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "fallback_path", "path": "/usr/bin/doc8"})
        );

        let json = serde_json::to_value(ToolStatus::Missing).unwrap();
        assert_eq!(json, serde_json::json!({"status": "missing"}));
    }
}
