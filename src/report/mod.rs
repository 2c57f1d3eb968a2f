//! Run output: informational lines, warnings and the final failure
//!
//! Inside GitHub Actions the lines are emitted as workflow commands so
//! warnings and failures show up as annotations. Elsewhere they are
//! printed as styled terminal output.

mod actions;
mod recording;
mod terminal;

pub use actions::{escape_data, workflow_command, ActionsReporter};
pub use recording::{RecordedLine, RecordingReporter};
pub use terminal::TerminalReporter;

/// Sink for the user-facing lines of a run
pub trait Reporter: Send + Sync {
    /// Informational line
    fn info(&self, message: &str);

    /// Recoverable problem; the run continues
    fn warning(&self, message: &str);

    /// Terminal failure of the run
    fn set_failed(&self, message: &str);
}

/// Where the run is being reported to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// GitHub Actions runner, emit workflow commands
    Actions,
    /// Plain terminal
    Terminal,
}

impl OutputMode {
    /// Detect the current environment
    pub fn detect() -> Self {
        Self::from_env_value(std::env::var("GITHUB_ACTIONS").ok().as_deref())
    }

    fn from_env_value(github_actions: Option<&str>) -> Self {
        match github_actions {
            Some("true") => Self::Actions,
            _ => Self::Terminal,
        }
    }

    /// Build the reporter for this mode
    pub fn reporter(self) -> Box<dyn Reporter> {
        match self {
            Self::Actions => Box::new(ActionsReporter),
            Self::Terminal => Box::new(TerminalReporter),
        }
    }
}
