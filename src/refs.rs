//! Parsing of the `ref` input
//!
//! The input is a YAML document holding either a single ref or a list of
//! refs, so both of these are accepted:
//!
//! ```yaml
//! refs/heads/main
//! ```
//!
//! ```yaml
//! - refs/heads/feat-1
//! - refs/heads/feat-2
//! ```

use crate::error::{PurgeError, PurgeResult};
use serde_yaml::Value;

/// Parse the ref input into an ordered list of refs
///
/// List elements are trimmed and blank ones dropped. A plain string is
/// trimmed and returned as-is, even when it ends up empty.
pub fn parse_refs(input: &str) -> PurgeResult<Vec<String>> {
    let parsed: Value = serde_yaml::from_str(input)
        .map_err(|e| PurgeError::invalid_input(format!("ref input is not valid YAML: {e}")))?;

    match parsed {
        Value::Sequence(items) => Ok(items
            .iter()
            .map(|item| scalar_to_string(item).trim().to_string())
            .filter(|r| !r.is_empty())
            .collect()),
        Value::String(s) => Ok(vec![s.trim().to_string()]),
        _ => Err(PurgeError::invalid_input(
            "ref input must be a string or array",
        )),
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        // Nested collections have no sensible ref form; render them as YAML
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
