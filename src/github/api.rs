//! Cache API abstraction
//!
//! The purge run only needs two operations from the hosting platform, so
//! they sit behind a trait that the real GitHub client and test doubles
//! both implement.

use crate::error::PurgeResult;
use crate::github::types::{CacheEntry, Repository};
use async_trait::async_trait;

/// Listing and deletion of Actions caches
#[async_trait]
pub trait CacheApi: Send + Sync {
    /// List the caches scoped to `git_ref`, in the order the API returns them
    ///
    /// A single request is issued; later pages are not fetched.
    async fn list_caches(&self, repo: &Repository, git_ref: &str) -> PurgeResult<Vec<CacheEntry>>;

    /// Delete one cache by id
    async fn delete_cache(&self, repo: &Repository, cache_id: u64) -> PurgeResult<()>;
}
