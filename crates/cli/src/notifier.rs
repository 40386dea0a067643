//! Console warning channel

use colored::Colorize;
use docprobe_core::port::WarningNotifier;

/// Prints probe warnings to stderr in yellow
pub struct ConsoleNotifier;

impl WarningNotifier for ConsoleNotifier {
    fn show_warning(&self, message: &str) {
        eprintln!("{} {}", "warning:".yellow().bold(), message);
    }
}
