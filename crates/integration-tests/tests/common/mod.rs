//! Shared fixtures: a scratch directory and a shell script standing in for python

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use docprobe_core::domain::ProbeConfig;
use docprobe_core::port::log_sink::mocks::MemoryLogSink;
use docprobe_core::port::notifier::mocks::RecordingNotifier;
use docprobe_core::port::time_provider::SystemTimeProvider;
use docprobe_core::InterpreterProbe;
use docprobe_infra_system::{FsPathProbe, SubprocessExecutor};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique scratch directory, removed on drop
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "docprobe_it_{}_{}_{}",
            name,
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        ));
        std::fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    pub fn touch(&self, name: &str) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    /// Write a fake interpreter answering the probe one-liners
    ///
    /// `version_cmd` answers the version one-liner; modules listed in
    /// `installed` import cleanly, every other import fails like python does.
    /// Any other `-c` script is run by `sh`.
    #[cfg(unix)]
    pub fn fake_python(&self, version_cmd: &str, installed: &[&str]) -> PathBuf {
        let mut cases = String::new();
        for module in installed {
            cases.push_str(&format!("  \"import {}\") exit 0 ;;\n", module));
        }

        let script = format!(
            "#!/bin/sh\n\
             [ \"$1\" = \"-c\" ] || exit 2\n\
             case \"$2\" in\n\
             \x20 \"import sys; print(sys.version_info[0])\") {version_cmd} ;;\n\
             {cases}\
             \x20 import\\ *) echo \"ModuleNotFoundError: No module named '${{2#import }}'\" >&2; exit 1 ;;\n\
             \x20 *) sh -c \"$2\" ;;\n\
             esac\n"
        );
        self.write_executable("python", &script)
    }

    #[cfg(unix)]
    pub fn write_executable(&self, name: &str, contents: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.join(name);
        std::fs::write(&path, contents).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

/// Shell snippet printing `text` as the version probe answer
pub fn prints(text: &str) -> String {
    format!("printf '%s\\n' '{}'", text)
}

pub struct Wired {
    pub probe: InterpreterProbe,
    pub notifier: RecordingNotifier,
    pub log: MemoryLogSink,
}

/// Probe wired to the real subprocess executor and filesystem
pub fn wire(config: ProbeConfig, timeout: Option<Duration>) -> Wired {
    let notifier = RecordingNotifier::new();
    let log = MemoryLogSink::new();
    let probe = InterpreterProbe::new(
        config,
        Arc::new(SubprocessExecutor::new(Arc::new(SystemTimeProvider), timeout)),
        Arc::new(FsPathProbe),
        Arc::new(notifier.clone()),
        Arc::new(log.clone()),
    );
    Wired {
        probe,
        notifier,
        log,
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
