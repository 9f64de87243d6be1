//! yarn 1 `yarn audit --json`: one JSON object per line, tagged by `type`.
//!
//! Only `auditAdvisory` lines carry advisories. `error` lines abort the run; `info`,
//! `warning`, and `auditSummary` lines are ignored.

use crate::error::AuditReportError;
use crate::format::AuditFormat;
use crate::{AdvisoryRecord, RawId};
use serde::Deserialize;
use serde_json::Value;

const TYPE_ADVISORY: &str = "auditAdvisory";
const TYPE_SUMMARY: &str = "auditSummary";
const TYPE_ERROR: &str = "error";

#[derive(Clone, Debug, Deserialize)]
pub struct Line {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: Value,
}

#[derive(Clone, Debug, Deserialize)]
struct AdvisoryData {
    advisory: Advisory,
}

#[derive(Clone, Debug, Deserialize)]
struct Advisory {
    id: RawId,
    module_name: String,
    severity: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

/// Accept a set of typed lines as a yarn report if at least one of them is audit output.
pub(crate) fn parse_lines(values: Vec<Value>) -> Result<Vec<Line>, AuditReportError> {
    let mut lines = Vec::with_capacity(values.len());
    for value in values {
        let line: Line = serde_json::from_value(value).map_err(|e| malformed(e.to_string()))?;
        if line.kind == TYPE_ERROR {
            let summary = match &line.data {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(AuditReportError::ScannerReported {
                code: "yarn".to_string(),
                summary,
            });
        }
        lines.push(line);
    }

    if !lines
        .iter()
        .any(|l| l.kind == TYPE_ADVISORY || l.kind == TYPE_SUMMARY)
    {
        return Err(AuditReportError::UnrecognizedShape);
    }
    Ok(lines)
}

pub(crate) fn advisories(lines: Vec<Line>) -> Result<Vec<AdvisoryRecord>, AuditReportError> {
    lines
        .into_iter()
        .filter(|l| l.kind == TYPE_ADVISORY)
        .map(|l| {
            let data: AdvisoryData =
                serde_json::from_value(l.data).map_err(|e| malformed(e.to_string()))?;
            let adv = data.advisory;
            Ok(AdvisoryRecord {
                id: adv.id.into_string(),
                package: adv.module_name,
                severity: adv.severity,
                title: adv.title,
                url: adv.url,
            })
        })
        .collect()
}

fn malformed(message: String) -> AuditReportError {
    AuditReportError::Malformed {
        format: AuditFormat::YarnClassic,
        message,
    }
}
