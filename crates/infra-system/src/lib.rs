// docprobe Infrastructure - System Adapters
// Implements: CommandExecutor, PathProbe, LogSink

pub mod fs_path_probe;
pub mod subprocess_executor;
pub mod tracing_log_sink;

pub use fs_path_probe::FsPathProbe;
pub use subprocess_executor::SubprocessExecutor;
pub use tracing_log_sink::TracingLogSink;
