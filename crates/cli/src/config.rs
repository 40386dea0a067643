//! Probe configuration from flags and environment

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use docprobe_core::domain::config::DEFAULT_PYTHON_PATH;
use docprobe_core::domain::ProbeConfig;

/// Global options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Python interpreter to probe and run
    #[arg(long = "python", global = true, env = "DOCPROBE_PYTHON_PATH", default_value = DEFAULT_PYTHON_PATH)]
    pub python_path: String,

    /// sphinx-build executable used when `import sphinx` fails
    #[arg(long, global = true, env = "DOCPROBE_SPHINX_PATH")]
    pub sphinx_path: Option<String>,

    /// doc8 executable used when `import doc8.main` fails
    #[arg(long, global = true, env = "DOCPROBE_LINTER_PATH")]
    pub linter_path: Option<String>,

    /// Kill interpreter invocations after this many milliseconds
    #[arg(long, global = true, env = "DOCPROBE_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

impl ProbeArgs {
    /// Build the probe configuration, expanding `~` in paths
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            python_path: expand(&self.python_path),
            sphinx_path: self.sphinx_path.as_deref().map(|p| PathBuf::from(expand(p))),
            linter_path: self.linter_path.as_deref().map(|p| PathBuf::from(expand(p))),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

fn expand(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}
