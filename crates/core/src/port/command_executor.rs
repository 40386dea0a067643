// Command Executor Port
// Abstraction for spawning the interpreter (subprocess in production, scripted in tests)

use async_trait::async_trait;
use thiserror::Error;

/// Captured result of a finished child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, None if the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: i64,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
            duration_ms: 0,
        }
    }

    /// Non-zero exit with the given stderr
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
            duration_ms: 0,
        }
    }
}

/// Execution errors (the process never produced a usable exit status)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("Spawn failed for '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("Process timeout after {0}ms")]
    Timeout(u64),

    #[error("IO error: {0}")]
    Io(String),
}

impl ExecutionError {
    /// Stable variant name used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ExecutionError::SpawnFailed { .. } => "SpawnFailed",
            ExecutionError::Timeout(_) => "Timeout",
            ExecutionError::Io(_) => "Io",
        }
    }
}

/// Command Executor trait
///
/// A non-zero exit is reported through `CommandOutput::success`, not as an
/// error; callers decide what a failed exit means.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `program` with `args` (passed as an argument vector, no shell)
    ///
    /// # Errors
    /// - ExecutionError::SpawnFailed if the program cannot be started
    /// - ExecutionError::Timeout if a configured timeout elapses
    /// - ExecutionError::Io if output collection fails
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ExecutionError>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Scripted response for one argument vector
    #[derive(Debug, Clone)]
    pub enum MockResponse {
        /// Exit 0 with this stdout
        Stdout(String),
        /// Exit non-zero with this stderr
        Exit(i32, String),
        /// Fail before the process runs
        Error(ExecutionError),
        /// Never finish (hung interpreter)
        Hang,
    }

    /// Mock Command Executor for testing
    ///
    /// Responses are keyed by the space-joined argument vector. Unscripted
    /// invocations fail with exit code 1, like a missing module would.
    #[derive(Clone, Default)]
    pub struct MockCommandExecutor {
        responses: Arc<Mutex<HashMap<String, MockResponse>>>,
        calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
        delay: Option<Duration>,
    }

    impl MockCommandExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Delay every response (to observe the probing state)
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn respond(&self, args: &[&str], response: MockResponse) {
            self.responses
                .lock()
                .unwrap()
                .insert(args.join(" "), response);
        }

        pub fn respond_stdout(&self, args: &[&str], stdout: impl Into<String>) {
            self.respond(args, MockResponse::Stdout(stdout.into()));
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        /// Argument vectors of every call, space-joined, in call order
        pub fn calls(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(_, args)| args.join(" "))
                .collect()
        }

        pub fn programs(&self) -> Vec<String> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .map(|(program, _)| program.clone())
                .collect()
        }
    }

    #[async_trait]
    impl CommandExecutor for MockCommandExecutor {
        async fn run(
            &self,
            program: &str,
            args: &[String],
        ) -> Result<CommandOutput, ExecutionError> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));

            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let response = self.responses.lock().unwrap().get(&args.join(" ")).cloned();

            match response {
                Some(MockResponse::Stdout(stdout)) => Ok(CommandOutput::success(stdout)),
                Some(MockResponse::Exit(code, stderr)) => Ok(CommandOutput::failure(code, stderr)),
                Some(MockResponse::Error(err)) => Err(err),
                Some(MockResponse::Hang) => std::future::pending().await,
                None => Ok(CommandOutput::failure(
                    1,
                    format!("ModuleNotFoundError: unscripted call '{}'", args.join(" ")),
                )),
            }
        }
    }
}
