//! Locating the JSON payload inside captured process output.
//!
//! Captured stdout is not always clean: package managers print banners, deprecation warnings,
//! or progress lines around the report. The strategies below are tried in order.

use crate::error::AuditReportError;
use crate::format::AuditFormat;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Payload {
    /// A single JSON document.
    Document(Value),
    /// Newline-delimited JSON objects.
    Lines(Vec<Value>),
}

pub(crate) fn extract_payload(text: &str) -> Result<Payload, AuditReportError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AuditReportError::Empty);
    }

    // 1) The whole output is one document.
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return Ok(Payload::Document(value));
    }

    // 2) NDJSON: every line that is a JSON object carrying a `type` tag. Once one such line is
    //    seen, any other line that opens an object must parse too; banners are plain text.
    if let Some(lines) = ndjson_lines(trimmed)? {
        return Ok(Payload::Lines(lines));
    }

    // 3) One document surrounded by noise: the outermost `{ ... }` span.
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}'))
        && start < end
        && let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..=end])
    {
        return Ok(Payload::Document(value));
    }

    Err(AuditReportError::UnrecognizedShape)
}

fn ndjson_lines(text: &str) -> Result<Option<Vec<Value>>, AuditReportError> {
    let mut lines = Vec::new();
    let mut broken = None;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if !line.starts_with('{') {
            continue;
        }
        match serde_json::from_str::<Value>(line) {
            Ok(value) if value.get("type").is_some_and(Value::is_string) => lines.push(value),
            Ok(_) => {}
            Err(e) => {
                broken.get_or_insert((idx + 1, e));
            }
        }
    }

    if lines.is_empty() {
        return Ok(None);
    }
    match broken {
        Some((line, e)) => Err(AuditReportError::Malformed {
            format: AuditFormat::YarnClassic,
            message: format!("line {line}: {e}"),
        }),
        None => Ok(Some(lines)),
    }
}
