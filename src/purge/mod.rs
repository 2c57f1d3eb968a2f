//! Cache purge run
//!
//! Parses the ref input, then for each ref lists its caches and deletes
//! them one by one. A cache that cannot be deleted is reported as a warning
//! and the run moves on; only a bad ref input, a failed listing, or (with
//! `fail_on_warning`) a run that produced warnings ends in failure.

mod result;

pub use result::RunResult;

use crate::error::{PurgeError, PurgeResult};
use crate::format::{format_bytes, format_date};
use crate::github::{CacheApi, CacheEntry, Repository};
use crate::refs::parse_refs;
use crate::report::Reporter;
use result::plural;
use tracing::{debug, info};

/// Everything a run needs, passed explicitly to each step
pub struct PurgeContext<'a> {
    pub api: &'a dyn CacheApi,
    pub reporter: &'a dyn Reporter,
    pub repository: Repository,
    pub fail_on_warning: bool,
}

/// Banner printed at the start of a run
pub fn banner() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Purge the caches of every ref in `ref_input`
///
/// Returns the run's counters, or the error that ended it. When
/// `fail_on_warning` is set and any cache could not be deleted, the run
/// still completes and summarizes before failing with
/// [`PurgeError::WarningEscalation`].
pub async fn run(ctx: &PurgeContext<'_>, ref_input: &str) -> PurgeResult<RunResult> {
    ctx.reporter.info(&banner());

    let refs = parse_refs(ref_input)?;
    info!("Purging caches of {} ref(s) in {}", refs.len(), ctx.repository);

    let mut result = RunResult::default();
    for git_ref in &refs {
        purge_ref(ctx, git_ref, &mut result).await?;
    }

    ctx.reporter.info(&result.summary());

    if ctx.fail_on_warning && result.has_warnings() {
        return Err(PurgeError::WarningEscalation);
    }

    Ok(result)
}

/// Message reported when a run fails
pub fn failure_message(err: &PurgeError) -> String {
    if err.is_escalation() {
        format!("⚠️ {}", err)
    } else {
        format!("❌ {}", err)
    }
}

async fn purge_ref(ctx: &PurgeContext<'_>, git_ref: &str, result: &mut RunResult) -> PurgeResult<()> {
    let caches = ctx.api.list_caches(&ctx.repository, git_ref).await?;

    ctx.reporter.info(&format!(
        "📦 {} {} found for ref \"{}\"",
        caches.len(),
        plural(caches.len(), "cache", "caches"),
        git_ref
    ));

    for cache in &caches {
        match delete_entry(ctx, cache).await {
            Ok(()) => {
                ctx.reporter.info(&deleted_message(cache));
                result.record_deleted(cache.size_or_zero());
            }
            Err(e) => {
                ctx.reporter.warning(&format!("⚠️ {}", warning_text(&e)));
                result.record_warning();
            }
        }
    }

    result.refs_processed += 1;
    Ok(())
}

async fn delete_entry(ctx: &PurgeContext<'_>, cache: &CacheEntry) -> PurgeResult<()> {
    let id = cache.id.ok_or(PurgeError::MissingIdentifier)?;

    debug!("Deleting cache {} ({})", id, cache.key);
    ctx.api
        .delete_cache(&ctx.repository, id)
        .await
        .map_err(|e| PurgeError::DeletionFailed {
            id,
            reason: e.to_string(),
        })
}

fn warning_text(err: &PurgeError) -> String {
    match err {
        PurgeError::MissingIdentifier => format!("Could not delete cache (no id): {}", err),
        other => other.to_string(),
    }
}

fn deleted_message(cache: &CacheEntry) -> String {
    let created_at = match cache.created_at.as_deref() {
        Some(raw) => format_date(raw).unwrap_or_else(|_| raw.to_string()),
        None => "unknown".to_string(),
    };
    let size = cache
        .size_in_bytes
        .map(format_bytes)
        .unwrap_or_else(|| "unknown".to_string());

    [
        "🗑️ Deleted cache:".to_string(),
        format!("  - ID: {}", cache.id.unwrap_or_default()),
        format!("  - Key: {}", cache.key),
        format!("  - Ref: {}", cache.git_ref),
        format!("  - Created at: {}", created_at),
        format!("  - Size: {}", size),
    ]
    .join("\n")
}
