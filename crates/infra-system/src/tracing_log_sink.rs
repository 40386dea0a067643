// LogSink that forwards probe messages to tracing
use tracing::debug;

use docprobe_core::port::LogSink;

/// Target for probe command logs (filter with `RUST_LOG=docprobe::exec=debug`)
pub const EXEC_LOG_TARGET: &str = "docprobe::exec";

pub struct TracingLogSink;

impl LogSink for TracingLogSink {
    fn log(&self, message: &str) {
        debug!(target: EXEC_LOG_TARGET, "{}", message);
    }
}
