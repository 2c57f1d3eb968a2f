//! GitHub Actions cache API
//!
//! `CacheApi` is the seam the purge run talks to; `GithubClient` is the
//! REST implementation.

pub mod api;
pub mod client;
pub mod types;

pub use api::CacheApi;
pub use client::{GithubClient, DEFAULT_API_URL};
pub use types::{CacheEntry, CacheList, Repository};
