// Interpreter probe: version + optional tool detection, and the exec choke point
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, error, info};

use super::command::CommandFailure;
use super::constants::{INLINE_SCRIPT_FLAG, VERSION_PROBE_SCRIPT};
use super::readiness::ReadinessSignal;
use crate::domain::{OptionalTool, ProbeConfig, ProbeReport, ProbeState, PythonVersion, ToolStatus};
use crate::error::{ProbeError, Result};
use crate::port::{CommandExecutor, LogSink, PathProbe, WarningNotifier};

/// Interpreter probe
///
/// Runs the setup sequence (version, then docutils, sphinx and doc8) once and
/// publishes the outcome as a terminal `ProbeState`. Every interpreter
/// invocation, including the probe's own, goes through [`InterpreterProbe::exec`].
pub struct InterpreterProbe {
    config: ProbeConfig,
    executor: Arc<dyn CommandExecutor>,
    paths: Arc<dyn PathProbe>,
    notifier: Arc<dyn WarningNotifier>,
    log: Arc<dyn LogSink>,
    version: OnceCell<PythonVersion>,
    readiness: ReadinessSignal,
    setup_lock: Mutex<()>,
}

impl InterpreterProbe {
    /// Create a probe in the `Probing` state. Nothing is spawned yet.
    ///
    /// # Arguments
    /// * `config` - Interpreter path and optional tool paths
    /// * `executor` - Spawns the interpreter
    /// * `paths` - Existence check for the sphinx/doc8 fallback paths
    /// * `notifier` - Receives one warning per missing optional tool
    /// * `log` - Receives a line per command and per outcome
    pub fn new(
        config: ProbeConfig,
        executor: Arc<dyn CommandExecutor>,
        paths: Arc<dyn PathProbe>,
        notifier: Arc<dyn WarningNotifier>,
        log: Arc<dyn LogSink>,
    ) -> Self {
        Self {
            config,
            executor,
            paths,
            notifier,
            log,
            version: OnceCell::new(),
            readiness: ReadinessSignal::new(),
            setup_lock: Mutex::new(()),
        }
    }

    /// Create a probe and run the setup sequence to completion
    ///
    /// The returned probe is either ready or failed; inspect it with
    /// [`state`](Self::state) or [`wait_ready`](Self::wait_ready).
    ///
    /// # Example
    /// ```ignore
    /// let probe = InterpreterProbe::initialize(
    ///     ProbeConfig::default(),
    ///     Arc::new(SubprocessExecutor::new(Arc::new(SystemTimeProvider), None)),
    ///     Arc::new(FsPathProbe),
    ///     Arc::new(SilentNotifier),
    ///     Arc::new(TracingLogSink),
    /// )
    /// .await;
    /// let report = probe.wait_ready().await?;
    /// ```
    pub async fn initialize(
        config: ProbeConfig,
        executor: Arc<dyn CommandExecutor>,
        paths: Arc<dyn PathProbe>,
        notifier: Arc<dyn WarningNotifier>,
        log: Arc<dyn LogSink>,
    ) -> Arc<Self> {
        let probe = Arc::new(Self::new(config, executor, paths, notifier, log));
        // Outcome is recorded in the readiness state
        let _ = probe.run_setup().await;
        probe
    }

    /// Create a probe and run the setup sequence on a background task
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        config: ProbeConfig,
        executor: Arc<dyn CommandExecutor>,
        paths: Arc<dyn PathProbe>,
        notifier: Arc<dyn WarningNotifier>,
        log: Arc<dyn LogSink>,
    ) -> Arc<Self> {
        let probe = Arc::new(Self::new(config, executor, paths, notifier, log));
        let task_probe = Arc::clone(&probe);
        tokio::spawn(async move {
            let _ = task_probe.run_setup().await;
        });
        probe
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// True once the setup sequence completed successfully
    pub fn is_ready(&self) -> bool {
        self.readiness.current().is_ready()
    }

    pub fn state(&self) -> ProbeState {
        self.readiness.current()
    }

    /// Detected major version, if version detection has succeeded
    pub fn version(&self) -> Option<PythonVersion> {
        self.version.get().copied()
    }

    /// Wait for the setup sequence to finish
    ///
    /// # Errors
    /// - ProbeError::SetupFailed if version detection failed
    pub async fn wait_ready(&self) -> Result<ProbeReport> {
        let mut token = self.readiness.subscribe();
        match token.wait().await {
            Some(state) => outcome(state),
            None => Err(ProbeError::SetupFailed(
                "readiness signal dropped".to_string(),
            )),
        }
    }

    /// Run the setup sequence
    ///
    /// Runs at most once. Later (or concurrent) calls return the recorded
    /// outcome without invoking the interpreter again.
    pub async fn run_setup(&self) -> Result<ProbeReport> {
        let _guard = self.setup_lock.lock().await;

        let current = self.readiness.current();
        if current.is_terminal() {
            return outcome(current);
        }

        info!(python = %self.config.python_path, "Starting interpreter probe");

        match self.probe_sequence().await {
            Ok(report) => {
                info!(
                    version = %report.version,
                    docutils = %report.docutils,
                    sphinx = %report.sphinx,
                    doc8 = %report.doc8,
                    "Interpreter probe completed"
                );
                self.readiness.publish(ProbeState::Ready {
                    report: report.clone(),
                });
                Ok(report)
            }
            Err(e) => {
                error!(
                    python = %self.config.python_path,
                    error = %e,
                    "Interpreter probe failed"
                );
                self.readiness.publish(ProbeState::Failed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn probe_sequence(&self) -> Result<ProbeReport> {
        let version = self.detect_version().await?;

        let docutils = self.check_tool(OptionalTool::Docutils).await;
        let sphinx = self.check_tool(OptionalTool::Sphinx).await;
        let doc8 = self.check_tool(OptionalTool::Doc8).await;

        Ok(ProbeReport {
            version,
            docutils,
            sphinx,
            doc8,
        })
    }

    /// Determine the interpreter's major version
    ///
    /// The interpreter is asked only until the first success; the result is
    /// cached for the lifetime of the probe.
    ///
    /// # Errors
    /// - ProbeError::Command if the interpreter could not be run
    /// - ProbeError::UnsupportedVersion if it printed anything but 2 or 3
    pub async fn detect_version(&self) -> Result<PythonVersion> {
        self.version
            .get_or_try_init(|| async {
                let output = self
                    .exec(&[INLINE_SCRIPT_FLAG, VERSION_PROBE_SCRIPT])
                    .await?;
                let version = PythonVersion::from_probe_output(&output)?;
                debug!(version = %version, "Interpreter version detected");
                Ok::<_, ProbeError>(version)
            })
            .await
            .copied()
    }

    /// Check one optional tool, warning the user if it is missing
    pub async fn check_tool(&self, tool: OptionalTool) -> ToolStatus {
        let failure = match self
            .exec(&[INLINE_SCRIPT_FLAG, tool.import_statement()])
            .await
        {
            Ok(_) => return ToolStatus::Importable,
            Err(failure) => failure,
        };

        debug!(tool = %tool, error = %failure.name, "Import check failed");

        if let Some(path) = self.config.fallback_path(tool) {
            if self.paths.exists(path).await {
                debug!(tool = %tool, path = %path.display(), "Using configured tool path");
                return ToolStatus::FallbackPath(path.clone());
            }
        }

        // The notifier is the user-facing channel; keep tracing below warn
        info!(tool = %tool, "Optional tool not found");
        self.notifier.show_warning(tool.warning_message());
        ToolStatus::Missing
    }

    /// Run the configured interpreter with `args` and capture stdout
    ///
    /// Arguments go to the process as-is (no shell, no quoting). Works in
    /// any readiness state.
    ///
    /// # Errors
    /// CommandFailure carrying the composed diagnostic when the process
    /// cannot be run or exits unsuccessfully.
    pub async fn exec<S: AsRef<str>>(&self, args: &[S]) -> std::result::Result<String, CommandFailure> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let command_line = format!("{} {}", self.config.python_path, args.join(" "));
        let command_line = command_line.trim_end();

        self.log.log(&format!("Running cmd: {}", command_line));

        let result = self.executor.run(&self.config.python_path, &args).await;

        let failure = match result {
            Ok(output) if output.success => {
                self.log
                    .log(&format!("Successful exec: {}", output.stdout.trim_end()));
                return Ok(output.stdout);
            }
            Ok(output) => CommandFailure::from_exit(command_line, &output),
            Err(e) => CommandFailure::from_error(command_line, &e),
        };

        self.log.log(&failure.diagnostic());
        Err(failure)
    }
}

fn outcome(state: ProbeState) -> Result<ProbeReport> {
    match state {
        ProbeState::Ready { report } => Ok(report),
        ProbeState::Failed { reason } => Err(ProbeError::SetupFailed(reason)),
        ProbeState::Probing => Err(ProbeError::SetupFailed(
            "probe has not finished".to_string(),
        )),
    }
}
