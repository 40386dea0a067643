// Probe constants (no magic values in the setup sequence)

/// Interpreter flag for running a one-liner
pub const INLINE_SCRIPT_FLAG: &str = "-c";

/// One-liner printing the interpreter's major version
pub const VERSION_PROBE_SCRIPT: &str = "import sys; print(sys.version_info[0])";

/// Name used for diagnostics when the process exited unsuccessfully
pub const NON_ZERO_EXIT_NAME: &str = "NonZeroExit";
