//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one JSON document on stdout:
//! an outcome, a list, or the error object below.

use anyhow::{Context, Result};
use gamectl_common::ActionOutcome;
use serde_json::json;

use crate::domain::ServerRegistry;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Format an action outcome.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_outcome(outcome: &ActionOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("JSON serialization failed")
}

/// Format the registered servers as an array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_servers(registry: &ServerRegistry) -> Result<String> {
    let servers: Vec<_> = registry
        .iter()
        .map(|s| {
            json!({
                "key": s.key,
                "name": s.name,
                "container": s.container,
                "operations": {
                    "start": s.operations.start.display(),
                    "stop": s.operations.stop.display(),
                    "restart": s.operations.restart.display(),
                },
            })
        })
        .collect();
    serde_json::to_string_pretty(&servers).context("JSON serialization failed")
}
