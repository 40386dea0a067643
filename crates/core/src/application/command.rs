// Command failure diagnostics for the exec choke point

use thiserror::Error;

use super::constants::NON_ZERO_EXIT_NAME;
use crate::port::{CommandOutput, ExecutionError};

/// Caller-visible failure of one interpreter invocation
///
/// Renders as `name`, `message`, `trace`, a blank line, then the captured
/// stderr, one per line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}\n{message}\n{trace}\n\n{stderr}")]
pub struct CommandFailure {
    /// Failure kind (`NonZeroExit`, `SpawnFailed`, `Timeout`, `Io`)
    pub name: String,
    pub message: String,
    /// Where the failure happened: the command line and exit status
    pub trace: String,
    /// Captured standard error (empty if the process never ran)
    pub stderr: String,
}

impl CommandFailure {
    /// Process ran and exited unsuccessfully
    pub fn from_exit(command_line: &str, output: &CommandOutput) -> Self {
        let status = match output.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        };

        Self {
            name: NON_ZERO_EXIT_NAME.to_string(),
            message: format!("Command failed: {} ({})", command_line, status),
            trace: format!("    at {} [{}, {}ms]", command_line, status, output.duration_ms),
            stderr: output.stderr.clone(),
        }
    }

    /// Process could not be run to completion
    pub fn from_error(command_line: &str, err: &ExecutionError) -> Self {
        Self {
            name: err.kind().to_string(),
            message: err.to_string(),
            trace: format!("    at {}", command_line),
            stderr: String::new(),
        }
    }

    /// Full multi-line diagnostic
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_failure_diagnostic_layout() {
        let output = CommandOutput::failure(1, "ModuleNotFoundError: No module named 'doc8'\n");
        let failure = CommandFailure::from_exit("python -c import doc8.main", &output);

        assert_eq!(failure.name, "NonZeroExit");
        let diagnostic = failure.diagnostic();
        let lines: Vec<&str> = diagnostic.lines().collect();
        assert_eq!(lines[0], "NonZeroExit");
        assert_eq!(
            lines[1],
            "Command failed: python -c import doc8.main (exit code 1)"
        );
        assert!(lines[2].contains("python -c import doc8.main"));
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "ModuleNotFoundError: No module named 'doc8'");
    }

    #[test]
    fn test_spawn_failure_keeps_error_name_and_message() {
        let err = ExecutionError::SpawnFailed {
            program: "/nope/python".to_string(),
            reason: "No such file or directory (os error 2)".to_string(),
        };
        let failure = CommandFailure::from_error("/nope/python -c print(1)", &err);
        let text = failure.to_string();

        assert!(text.starts_with("SpawnFailed\n"));
        assert!(text.contains("No such file or directory"));
        assert!(text.contains("/nope/python -c print(1)"));
    }

    #[test]
    fn test_signal_termination() {
        let mut output = CommandOutput::failure(0, "");
        output.exit_code = None;
        let failure = CommandFailure::from_exit("python", &output);
        assert!(failure.message.contains("terminated by signal"));
    }
}
