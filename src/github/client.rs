//! GitHub REST client for the Actions cache endpoints
//!
//! Requests go through a blocking `ureq` agent. The async `CacheApi`
//! methods move each call onto tokio's blocking pool and await it, so
//! calls are still issued one at a time.

use crate::error::{PurgeError, PurgeResult};
use crate::github::api::CacheApi;
use crate::github::types::{ApiErrorBody, CacheEntry, CacheList, Repository};
use async_trait::async_trait;
use tracing::debug;
use ureq::http::Response;
use ureq::{Agent, Body};

/// Default REST endpoint for github.com
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Largest page the list endpoint serves in one response
const LIST_PAGE_SIZE: u32 = 100;

const ACCEPT: &str = "application/vnd.github+json";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for `/repos/{owner}/{repo}/actions/caches`
#[derive(Clone)]
pub struct GithubClient {
    agent: Agent,
    api_url: String,
    token: String,
}

impl GithubClient {
    /// Create a client for the given API base URL and token
    pub fn new(api_url: &str, token: &str) -> Self {
        let config = Agent::config_builder()
            .http_status_as_error(false)
            .build();

        Self {
            agent: config.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn caches_url(&self, repo: &Repository) -> String {
        format!(
            "{}/repos/{}/{}/actions/caches",
            self.api_url, repo.owner, repo.name
        )
    }

    fn list_blocking(&self, repo: &Repository, git_ref: &str) -> PurgeResult<Vec<CacheEntry>> {
        let url = self.caches_url(repo);
        debug!("GET {} (ref={})", url, git_ref);

        let response = self
            .agent
            .get(&url)
            .query("ref", git_ref)
            .query("per_page", LIST_PAGE_SIZE.to_string())
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .call()?;

        let body = read_success_body(response)?;
        let list: CacheList = serde_json::from_str(&body)?;
        debug!(
            "Listed {} of {} cache(s) for ref {}",
            list.actions_caches.len(),
            list.total_count,
            git_ref
        );
        Ok(list.actions_caches)
    }

    fn delete_blocking(&self, repo: &Repository, cache_id: u64) -> PurgeResult<()> {
        let url = format!("{}/{}", self.caches_url(repo), cache_id);
        debug!("DELETE {}", url);

        let response = self
            .agent
            .delete(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", ACCEPT)
            .header("X-GitHub-Api-Version", API_VERSION)
            .header("User-Agent", USER_AGENT)
            .call()?;

        read_success_body(response)?;
        Ok(())
    }
}

#[async_trait]
impl CacheApi for GithubClient {
    async fn list_caches(&self, repo: &Repository, git_ref: &str) -> PurgeResult<Vec<CacheEntry>> {
        let client = self.clone();
        let repo = repo.clone();
        let git_ref = git_ref.to_string();
        run_blocking(move || client.list_blocking(&repo, &git_ref)).await
    }

    async fn delete_cache(&self, repo: &Repository, cache_id: u64) -> PurgeResult<()> {
        let client = self.clone();
        let repo = repo.clone();
        run_blocking(move || client.delete_blocking(&repo, cache_id)).await
    }
}

async fn run_blocking<T, F>(task: F) -> PurgeResult<T>
where
    F: FnOnce() -> PurgeResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| PurgeError::Internal(format!("HTTP task failed: {e}")))?
}

/// Read the body of a 2xx response, or turn any other status into an API error
fn read_success_body(mut response: Response<Body>) -> PurgeResult<String> {
    let status = response.status();
    let body = response.body_mut().read_to_string()?;
    debug!("Response status {}", status);

    if status.is_success() {
        return Ok(body);
    }

    Err(PurgeError::api(status.as_u16(), error_message(&body, status.canonical_reason())))
}

/// Pull the `message` field out of a GitHub error body, falling back to the raw text
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.message;
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        reason.unwrap_or("request failed").to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let client = GithubClient::new("https://ghe.example.com/api/v3/", "t");
        assert_eq!(client.api_url(), "https://ghe.example.com/api/v3");
        assert_eq!(
            client.caches_url(&Repository::new("o", "r")),
            "https://ghe.example.com/api/v3/repos/o/r/actions/caches"
        );
    }

    #[test]
    fn error_message_prefers_json_message() {
        let body = r#"{"message": "Not Found", "documentation_url": "https://docs.github.com"}"#;
        assert_eq!(error_message(body, Some("Not Found")), "Not Found");
    }

    #[test]
    fn error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message(" upstream timeout \n", None), "upstream timeout");
        assert_eq!(error_message("", Some("Bad Gateway")), "Bad Gateway");
        assert_eq!(error_message("", None), "request failed");
    }
}
