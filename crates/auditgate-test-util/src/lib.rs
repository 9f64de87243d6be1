//! Shared test utilities for the auditgate workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `auditgate-types` would not suffice.

use serde_json::Value;

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";
pub const SHA256_PLACEHOLDER: &str = "__SHA256__";

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// Only the root of a report envelope (an object with `schema`, `tool`, `inputs` and `result`)
/// is touched:
///
/// - `started_at` / `finished_at` become `"__TIMESTAMP__"`.
/// - `tool.version` becomes `"__VERSION__"`.
/// - `inputs.allowlist.sha256` / `inputs.audit.sha256` become `"__SHA256__"` when present, since
///   checkouts may rewrite line endings in fixture files.
///
/// Anything nested inside `result` is left alone, so advisory data that happens to use the same
/// key names is compared verbatim.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_envelope = obj.contains_key("schema")
        && obj.contains_key("tool")
        && obj.contains_key("inputs")
        && obj.contains_key("result");
    if !is_envelope {
        return value;
    }

    for key in ["started_at", "finished_at"] {
        if obj.contains_key(key) {
            obj.insert(key.to_string(), Value::String(TIMESTAMP_PLACEHOLDER.to_string()));
        }
    }

    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }

    if let Some(inputs) = obj.get_mut("inputs").and_then(Value::as_object_mut) {
        for input in ["allowlist", "audit"] {
            if let Some(section) = inputs.get_mut(input).and_then(Value::as_object_mut)
                && section.contains_key("sha256")
            {
                section.insert(
                    "sha256".to_string(),
                    Value::String(SHA256_PLACEHOLDER.to_string()),
                );
            }
        }
    }

    value
}
