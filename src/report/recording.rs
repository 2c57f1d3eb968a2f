//! In-memory reporter, used to inspect a run's output

use super::Reporter;
use std::sync::Mutex;

/// One reported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedLine {
    Info(String),
    Warning(String),
    Failed(String),
}

/// Reporter that keeps every line in order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<RecordedLine>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines reported so far
    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                RecordedLine::Info(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                RecordedLine::Warning(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|line| match line {
                RecordedLine::Failed(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, line: RecordedLine) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(RecordedLine::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(RecordedLine::Warning(message.to_string()));
    }

    fn set_failed(&self, message: &str) {
        self.push(RecordedLine::Failed(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_kind() {
        let reporter = RecordingReporter::new();
        reporter.info("a");
        reporter.warning("b");
        reporter.set_failed("c");

        assert_eq!(
            reporter.lines(),
            vec![
                RecordedLine::Info("a".into()),
                RecordedLine::Warning("b".into()),
                RecordedLine::Failed("c".into()),
            ]
        );
        assert_eq!(reporter.warnings(), vec!["b"]);
        assert_eq!(reporter.failures(), vec!["c"]);
    }
}
