//! GitHub Actions cache records

use crate::error::{PurgeError, PurgeResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repository the caches belong to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for Repository {
    type Err = PurgeError;

    fn from_str(s: &str) -> PurgeResult<Self> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(PurgeError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One cache entry as returned by the list endpoint
///
/// Every field is optional on the wire, so missing values deserialize to
/// their defaults instead of failing the whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub key: String,

    #[serde(default, rename = "ref", deserialize_with = "null_as_default")]
    pub git_ref: String,

    #[serde(default)]
    pub version: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub last_accessed_at: Option<String>,

    #[serde(default)]
    pub size_in_bytes: Option<u64>,
}

impl CacheEntry {
    /// Size counted towards the deleted total
    pub fn size_or_zero(&self) -> u64 {
        self.size_in_bytes.unwrap_or(0)
    }
}

/// Body of `GET /repos/{owner}/{repo}/actions/caches`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheList {
    #[serde(default)]
    pub total_count: u64,

    #[serde(default)]
    pub actions_caches: Vec<CacheEntry>,
}

/// Error body returned by the GitHub REST API
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
