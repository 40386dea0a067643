//! docprobe CLI - Probe a Python interpreter for documentation tooling

mod config;
mod logging;
mod notifier;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::sync::Arc;
use tabled::{Table, Tabled};
use tracing::info;

use docprobe_core::application::constants::NON_ZERO_EXIT_NAME;
use docprobe_core::application::CommandFailure;
use docprobe_core::domain::{OptionalTool, ProbeReport, ToolStatus};
use docprobe_core::port::time_provider::SystemTimeProvider;
use docprobe_core::InterpreterProbe;
use docprobe_infra_system::{FsPathProbe, SubprocessExecutor, TracingLogSink};

use config::ProbeArgs;
use notifier::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "docprobe")]
#[command(about = "Detect Python and the docutils/sphinx/doc8 tooling", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    probe: ProbeArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the interpreter and report available tools
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the interpreter with the given arguments and print its stdout
    Exec {
        /// Arguments passed to the interpreter as-is
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
}

#[derive(Tabled)]
struct ToolRow {
    tool: String,
    status: String,
    feature: &'static str,
}

impl ToolRow {
    fn new(tool: OptionalTool, status: &ToolStatus) -> Self {
        let status = match status {
            ToolStatus::Missing => status.to_string().red().to_string(),
            _ => status.to_string().green().to_string(),
        };
        let feature = match tool {
            OptionalTool::Docutils | OptionalTool::Sphinx => "preview",
            OptionalTool::Doc8 => "lint",
        };

        Self {
            tool: tool.to_string(),
            status,
            feature,
        }
    }
}

fn build_probe(probe_args: &ProbeArgs) -> Result<InterpreterProbe> {
    let config = probe_args.probe_config();
    config.validate()?;

    info!(python = %config.python_path, "Using interpreter");

    let executor = Arc::new(SubprocessExecutor::new(
        Arc::new(SystemTimeProvider),
        probe_args.timeout(),
    ));

    Ok(InterpreterProbe::new(
        config,
        executor,
        Arc::new(FsPathProbe),
        Arc::new(ConsoleNotifier),
        Arc::new(TracingLogSink),
    ))
}

fn print_report(python: &str, report: &ProbeReport) {
    println!("{}", "Interpreter".cyan().bold());
    println!("  {} {}", "Path:".bold(), python);
    println!("  {} {}", "Version:".bold(), report.version);
    println!();

    let rows: Vec<ToolRow> = OptionalTool::ALL
        .into_iter()
        .map(|tool| ToolRow::new(tool, report.status(tool)))
        .collect();
    println!("{}", Table::new(rows));
    println!();

    let flag = |available: bool| {
        if available {
            "available".green()
        } else {
            "unavailable".red()
        }
    };
    println!("  {} {}", "Preview:".bold(), flag(report.preview_available()));
    println!("  {} {}", "Lint:".bold(), flag(report.lint_available()));
}

/// Error summary for a failed `exec`; only a non-zero exit means the interpreter ran
fn exec_failure_summary(python: &str, failure: &CommandFailure) -> String {
    if failure.name == NON_ZERO_EXIT_NAME {
        format!("{} exited unsuccessfully", python)
    } else {
        format!("Could not run {} ({})", python, failure.name)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;

    let probe = build_probe(&cli.probe)?;

    match cli.command {
        Commands::Status { json } => {
            let report = probe
                .run_setup()
                .await
                .context("Interpreter probe failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&probe.config().python_path, &report);
            }
        }

        Commands::Exec { args } => match probe.exec(args.as_slice()).await {
            Ok(stdout) => print!("{}", stdout),
            Err(failure) => {
                eprintln!("{}", failure);
                bail!(exec_failure_summary(&probe.config().python_path, &failure));
            }
        },
    }

    Ok(())
}
