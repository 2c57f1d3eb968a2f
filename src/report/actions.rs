//! GitHub Actions workflow command output

use super::Reporter;

/// Reporter that writes workflow commands to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionsReporter;

impl Reporter for ActionsReporter {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        println!("{}", workflow_command("warning", message));
    }

    fn set_failed(&self, message: &str) {
        println!("{}", workflow_command("error", message));
    }
}

/// Format a `::command::message` line
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

/// Escape a message so a single workflow command can carry it
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
