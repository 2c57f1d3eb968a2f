//! Aggregate outcome of a purge run

use crate::format::format_bytes;

/// Counters accumulated while refs are processed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Refs whose caches were listed and walked
    pub refs_processed: usize,

    /// Caches deleted successfully
    pub caches_deleted: usize,

    /// Sum of the sizes of successfully deleted caches
    pub total_bytes_deleted: u64,

    /// Entries that could not be deleted
    pub warnings: usize,
}

impl RunResult {
    /// Record a successful deletion
    pub fn record_deleted(&mut self, size_in_bytes: u64) {
        self.caches_deleted += 1;
        self.total_bytes_deleted += size_in_bytes;
    }

    /// Record an entry that failed or was skipped
    pub fn record_warning(&mut self) {
        self.warnings += 1;
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }

    /// Final summary line
    pub fn summary(&self) -> String {
        format!(
            "✅ Deleted {} {} with a total size of {}.",
            self.caches_deleted,
            plural(self.caches_deleted, "cache", "caches"),
            format_bytes(self.total_bytes_deleted)
        )
    }
}

pub(crate) fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
