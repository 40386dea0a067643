// Probe report and readiness state

use serde::{Deserialize, Serialize};

use super::tool::{OptionalTool, ToolStatus};
use super::version::PythonVersion;

/// Everything the setup sequence learned about the interpreter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub version: PythonVersion,
    pub docutils: ToolStatus,
    pub sphinx: ToolStatus,
    pub doc8: ToolStatus,
}

impl ProbeReport {
    pub fn status(&self, tool: OptionalTool) -> &ToolStatus {
        match tool {
            OptionalTool::Docutils => &self.docutils,
            OptionalTool::Sphinx => &self.sphinx,
            OptionalTool::Doc8 => &self.doc8,
        }
    }

    /// Tools that ended up missing, in check order
    pub fn missing_tools(&self) -> Vec<OptionalTool> {
        OptionalTool::ALL
            .into_iter()
            .filter(|tool| !self.status(*tool).is_available())
            .collect()
    }

    /// Preview needs docutils or a sphinx build
    pub fn preview_available(&self) -> bool {
        self.docutils.is_available() || self.sphinx.is_available()
    }

    pub fn lint_available(&self) -> bool {
        self.doc8.is_available()
    }
}

/// Readiness state machine: Probing -> Ready | Failed
///
/// Both terminal states are final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ProbeState {
    Probing,
    Ready { report: ProbeReport },
    Failed { reason: String },
}

impl ProbeState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProbeState::Probing)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ProbeState::Ready { .. })
    }

    pub fn report(&self) -> Option<&ProbeReport> {
        match self {
            ProbeState::Ready { report } => Some(report),
            _ => None,
        }
    }
}
