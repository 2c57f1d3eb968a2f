//! CLI argument definitions using clap derive
//!
//! Every input falls back to the environment variable GitHub Actions sets
//! for it, so the binary runs unchanged as an action step.

use crate::github::DEFAULT_API_URL;
use clap::{ArgAction, Parser};

/// Delete GitHub Actions caches for one or more refs
#[derive(Parser, Debug)]
#[command(name = "cache-purge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Token used to call the GitHub API
    #[arg(long, env = "INPUT_GITHUB-TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Ref whose caches are deleted, or a YAML list of refs
    #[arg(long = "ref", env = "INPUT_REF")]
    pub git_ref: Option<String>,

    /// Fail the run when any cache could not be deleted
    #[arg(
        long,
        env = "INPUT_FAIL-ON-WARNING",
        default_value = "false",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        value_parser = parse_bool_input
    )]
    pub fail_on_warning: bool,

    /// Repository owning the caches (owner/name)
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a boolean action input
///
/// Accepts the YAML 1.2 core schema spellings; an empty value is false.
pub fn parse_bool_input(s: &str) -> Result<bool, String> {
    match s.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" | "" => Ok(false),
        other => Err(format!(
            "invalid boolean '{other}', expected true | True | TRUE | false | False | FALSE"
        )),
    }
}
