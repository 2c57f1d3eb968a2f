//! Plain terminal output

use super::Reporter;
use console::style;

/// Reporter for running outside of GitHub Actions
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{} {}", style("[WARN]").yellow(), message);
    }

    fn set_failed(&self, message: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), message);
    }
}
