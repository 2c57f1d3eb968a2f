//! cache-purge - Delete GitHub Actions caches by ref
//!
//! Lists the Actions caches of one or more refs and deletes them, reporting
//! how many caches and bytes were freed.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod github;
pub mod purge;
pub mod refs;
pub mod report;

pub use error::{PurgeError, PurgeResult};
