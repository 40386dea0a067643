//! Probe lifecycle against real subprocesses
//!
//! A shell script plays the interpreter so the full setup sequence runs
//! through SubprocessExecutor and FsPathProbe.
#![cfg(unix)]

mod common;

use std::time::Duration;

use common::{path_str, prints, wire, Scratch};
use docprobe_core::domain::{ProbeConfig, ProbeState, PythonVersion, ToolStatus};
use docprobe_core::ProbeError;

#[tokio::test]
async fn test_probe_with_all_packages_installed() {
    let scratch = Scratch::new("all_installed");
    let python = scratch.fake_python(&prints("3"), &["docutils", "sphinx", "doc8.main"]);
    let wired = wire(ProbeConfig::new(path_str(&python)), None);

    let report = wired.probe.run_setup().await.unwrap();

    assert!(wired.probe.is_ready());
    assert_eq!(report.version, PythonVersion::Three);
    assert_eq!(report.docutils, ToolStatus::Importable);
    assert_eq!(report.sphinx, ToolStatus::Importable);
    assert_eq!(report.doc8, ToolStatus::Importable);
    assert!(wired.notifier.warnings().is_empty());
    assert!(wired.log.contains("Running cmd:"));
}

#[tokio::test]
async fn test_missing_packages_warn_and_fallback_paths_apply() {
    let scratch = Scratch::new("fallback");
    let python = scratch.fake_python(&prints("2"), &["docutils"]);
    let sphinx_build = scratch.touch("sphinx-build");
    let config = ProbeConfig::new(path_str(&python))
        .with_sphinx_path(&sphinx_build)
        .with_linter_path(scratch.dir.join("doc8-not-here"));
    let wired = wire(config, None);

    let report = wired.probe.run_setup().await.unwrap();

    assert!(wired.probe.is_ready());
    assert_eq!(report.version, PythonVersion::Two);
    assert_eq!(report.docutils, ToolStatus::Importable);
    assert_eq!(report.sphinx, ToolStatus::FallbackPath(sphinx_build));
    assert_eq!(report.doc8, ToolStatus::Missing);
    assert!(report.preview_available());
    assert!(!report.lint_available());
    assert_eq!(wired.notifier.warnings(), vec!["Linter doc8 cannot be found."]);
    // Import failure stderr reaches the log sink
    assert!(wired.log.contains("No module named 'doc8.main'"));
}

#[tokio::test]
async fn test_unsupported_version_is_terminal_failure() {
    let scratch = Scratch::new("bad_version");
    let python = scratch.fake_python(&prints("4"), &["docutils", "sphinx", "doc8.main"]);
    let wired = wire(ProbeConfig::new(path_str(&python)), None);

    assert!(wired.probe.run_setup().await.is_err());

    assert!(!wired.probe.is_ready());
    assert!(matches!(wired.probe.state(), ProbeState::Failed { .. }));
    let waited = tokio::time::timeout(Duration::from_secs(5), wired.probe.wait_ready())
        .await
        .expect("wait_ready must resolve for a failed probe");
    match waited {
        Err(ProbeError::SetupFailed(reason)) => assert!(reason.contains("\"4\\n\"")),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(wired.notifier.warnings().is_empty());
}

#[tokio::test]
async fn test_missing_interpreter_fails_setup() {
    let scratch = Scratch::new("no_python");
    let wired = wire(
        ProbeConfig::new(path_str(&scratch.dir.join("python-missing"))),
        None,
    );

    let err = wired.probe.run_setup().await.unwrap_err();

    match err {
        ProbeError::Command(failure) => assert_eq!(failure.name, "SpawnFailed"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!wired.probe.is_ready());
    assert!(wired.probe.version().is_none());
}

#[tokio::test]
async fn test_hung_version_probe_times_out_when_configured() {
    let scratch = Scratch::new("hung");
    let python = scratch.fake_python("sleep 10", &[]);
    let wired = wire(
        ProbeConfig::new(path_str(&python)),
        Some(Duration::from_millis(200)),
    );

    let err = wired.probe.run_setup().await.unwrap_err();

    match err {
        ProbeError::Command(failure) => {
            assert_eq!(failure.name, "Timeout");
            assert!(failure.message.contains("200ms"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(matches!(wired.probe.state(), ProbeState::Failed { .. }));
}

#[tokio::test]
async fn test_report_serializes_for_hosts() {
    let scratch = Scratch::new("json");
    let python = scratch.fake_python(&prints("3"), &["sphinx"]);
    let wired = wire(ProbeConfig::new(path_str(&python)), None);

    let report = wired.probe.run_setup().await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["version"], 3);
    assert_eq!(json["docutils"]["status"], "missing");
    assert_eq!(json["sphinx"]["status"], "importable");
    assert_eq!(json["doc8"]["status"], "missing");
}
