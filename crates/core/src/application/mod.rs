// Application Layer - Probe use cases

pub mod command;
pub mod constants;
pub mod probe;
pub mod readiness;

// Re-exports
pub use command::CommandFailure;
pub use probe::InterpreterProbe;
pub use readiness::{ReadinessSignal, ReadinessToken};
