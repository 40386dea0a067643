// Port Layer - Interfaces for external dependencies

pub mod command_executor;
pub mod log_sink;
pub mod notifier;
pub mod path_probe;
pub mod time_provider; // For deterministic durations

// Re-exports
pub use command_executor::{CommandExecutor, CommandOutput, ExecutionError};
pub use log_sink::LogSink;
pub use notifier::{SilentNotifier, WarningNotifier};
pub use path_probe::PathProbe;
pub use time_provider::TimeProvider;
