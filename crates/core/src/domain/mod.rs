// Domain Layer - Probe entities

pub mod config;
pub mod report;
pub mod tool;
pub mod version;

// Re-exports
pub use config::ProbeConfig;
pub use report::{ProbeReport, ProbeState};
pub use tool::{OptionalTool, ToolStatus};
pub use version::PythonVersion;
