// docprobe Core - Probe Logic & Ports
// NO infrastructure dependencies: processes and filesystem are reached through ports

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use application::InterpreterProbe;
pub use error::{ProbeError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
