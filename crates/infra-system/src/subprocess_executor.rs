// Subprocess executor implementation
// reason: async-trait, tokio for async process management
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, info};

use docprobe_core::port::{CommandExecutor, CommandOutput, ExecutionError, TimeProvider};

/// Subprocess executor
///
/// Spawns the program directly with an argument vector (no shell), inheriting
/// the parent's environment and working directory.
pub struct SubprocessExecutor {
    time_provider: Arc<dyn TimeProvider>,
    timeout: Option<Duration>,
}

impl SubprocessExecutor {
    /// Create a new subprocess executor
    ///
    /// # Arguments
    /// * `time_provider` - Time provider for duration tracking
    /// * `timeout` - Kill the child after this long (None waits forever)
    ///
    /// # Example
    /// ```ignore
    /// let executor = SubprocessExecutor::new(Arc::new(SystemTimeProvider), None);
    /// ```
    pub fn new(time_provider: Arc<dyn TimeProvider>, timeout: Option<Duration>) -> Self {
        Self {
            time_provider,
            timeout,
        }
    }

    /// Spawn child process and wait for output
    async fn spawn_and_wait(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<std::process::Output, ExecutionError> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // A timed-out child is killed when its future is dropped
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed {
                program: program.to_string(),
                reason: e.to_string(),
            })?;

        match self.timeout {
            Some(limit) => match timeout(limit, child.wait_with_output()).await {
                Ok(Ok(output)) => Ok(output),
                Ok(Err(e)) => Err(ExecutionError::Io(e.to_string())),
                Err(_) => Err(ExecutionError::Timeout(duration_millis(limit))),
            },
            None => child
                .wait_with_output()
                .await
                .map_err(|e| ExecutionError::Io(e.to_string())),
        }
    }

    /// Build command output from process output
    fn build_output(&self, output: std::process::Output, duration_ms: i64) -> CommandOutput {
        CommandOutput {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration_ms,
        }
    }
}

/// Milliseconds in `duration`, saturating at u64::MAX
fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

#[async_trait]
impl CommandExecutor for SubprocessExecutor {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, ExecutionError> {
        let start_time = self.time_provider.now_millis();

        debug!(
            program = %program,
            args = ?args,
            timeout_ms = ?self.timeout.map(|t| t.as_millis()),
            "Starting subprocess execution"
        );

        let output = self.spawn_and_wait(program, args).await?;

        let duration_ms = self.time_provider.now_millis() - start_time;
        let result = self.build_output(output, duration_ms);

        info!(
            program = %program,
            duration_ms = %duration_ms,
            exit_code = ?result.exit_code,
            success = %result.success,
            "Subprocess execution completed"
        );

        Ok(result)
    }
}
