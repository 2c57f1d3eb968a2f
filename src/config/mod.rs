//! Run configuration
//!
//! The raw CLI/environment inputs are validated once at startup into a
//! `Config`, which the rest of the run reads from.

use crate::cli::Cli;
use crate::error::{PurgeError, PurgeResult};
use crate::github::Repository;
use tracing::debug;

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    /// Token passed through to the API client
    pub token: String,

    /// Raw ref input, parsed later by the purge run
    pub ref_input: String,

    /// Escalate warnings into a failure at the end of the run
    pub fail_on_warning: bool,

    /// Repository owning the caches
    pub repository: Repository,

    /// GitHub REST API base URL
    pub api_url: String,
}

impl Config {
    /// Validate the parsed command line
    pub fn from_cli(cli: &Cli) -> PurgeResult<Self> {
        let token = required_input("github-token", cli.github_token.as_deref())?;
        // Not trimmed: leading indentation is significant to the YAML list form
        let ref_input = cli
            .git_ref
            .clone()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| missing_input("ref"))?;

        let repository = cli
            .repository
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| PurgeError::InvalidRepository(String::new()))?
            .parse::<Repository>()?;

        let api_url = cli.api_url.trim().to_string();
        if api_url.is_empty() {
            return Err(PurgeError::invalid_input("api-url must not be empty"));
        }

        debug!(
            "Configuration: repository={}, api_url={}, fail_on_warning={}",
            repository, api_url, cli.fail_on_warning
        );

        Ok(Self {
            token,
            ref_input,
            fail_on_warning: cli.fail_on_warning,
            repository,
            api_url,
        })
    }
}

/// Read a required input, trimmed; blank counts as missing
fn required_input(name: &str, value: Option<&str>) -> PurgeResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(missing_input(name)),
    }
}

fn missing_input(name: &str) -> PurgeError {
    PurgeError::invalid_input(format!("Input required and not supplied: {name}"))
}
