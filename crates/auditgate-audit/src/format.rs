use crate::error::AuditReportError;
use crate::payload::{Payload, extract_payload};
use crate::{npm_v1, npm_v2, yarn};
use auditgate_types::ids;
use serde_json::Value;
use std::fmt;

/// Known scanner report shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuditFormat {
    /// `npm audit --json` from npm 6: top-level `advisories` map.
    NpmV1,
    /// `npm audit --json` from npm 7+: `auditReportVersion: 2` and `vulnerabilities`.
    NpmV2,
    /// `yarn audit --json` from yarn 1: one JSON object per line.
    YarnClassic,
}

impl AuditFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditFormat::NpmV1 => ids::FORMAT_NPM_V1,
            AuditFormat::NpmV2 => ids::FORMAT_NPM_V2,
            AuditFormat::YarnClassic => ids::FORMAT_YARN_CLASSIC,
        }
    }
}

impl fmt::Display for AuditFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognised report, deserialized into the variant's own model.
#[derive(Clone, Debug)]
pub enum RawReport {
    NpmV1(npm_v1::Report),
    NpmV2(npm_v2::Report),
    YarnClassic(Vec<yarn::Line>),
}

impl RawReport {
    pub fn format(&self) -> AuditFormat {
        match self {
            RawReport::NpmV1(_) => AuditFormat::NpmV1,
            RawReport::NpmV2(_) => AuditFormat::NpmV2,
            RawReport::YarnClassic(_) => AuditFormat::YarnClassic,
        }
    }
}

/// Locate the payload in captured output and decide which report shape it is.
pub fn detect_report(text: &str) -> Result<RawReport, AuditReportError> {
    match extract_payload(text)? {
        Payload::Document(value) => detect_document(value),
        Payload::Lines(lines) => yarn::parse_lines(lines).map(RawReport::YarnClassic),
    }
}

fn detect_document(value: Value) -> Result<RawReport, AuditReportError> {
    let Some(obj) = value.as_object() else {
        return Err(AuditReportError::UnrecognizedShape);
    };

    if let Some(version) = obj.get("auditReportVersion") {
        return match version.as_u64() {
            Some(2) => deserialize(AuditFormat::NpmV2, value).map(RawReport::NpmV2),
            _ => Err(AuditReportError::UnsupportedVersion {
                version: version.to_string(),
            }),
        };
    }

    if obj.contains_key("advisories") {
        return deserialize(AuditFormat::NpmV1, value).map(RawReport::NpmV1);
    }

    if let Some(err) = obj.get("error") {
        return Err(scanner_error(err));
    }

    // A single yarn line (e.g. only an audit summary) is also a complete JSON document.
    if obj.contains_key("type") {
        return yarn::parse_lines(vec![value]).map(RawReport::YarnClassic);
    }

    Err(AuditReportError::UnrecognizedShape)
}

fn deserialize<T: serde::de::DeserializeOwned>(
    format: AuditFormat,
    value: Value,
) -> Result<T, AuditReportError> {
    serde_json::from_value(value).map_err(|e| AuditReportError::Malformed {
        format,
        message: e.to_string(),
    })
}

/// npm prints `{"error": {"code": "ENOLOCK", "summary": "...", "detail": "..."}}` on failure.
fn scanner_error(err: &Value) -> AuditReportError {
    let field = |name: &str| err.get(name).and_then(Value::as_str).map(str::to_string);
    match err {
        Value::String(s) => AuditReportError::ScannerReported {
            code: "unknown".to_string(),
            summary: s.clone(),
        },
        _ => AuditReportError::ScannerReported {
            code: field("code").unwrap_or_else(|| "unknown".to_string()),
            summary: field("summary")
                .or_else(|| field("detail"))
                .unwrap_or_else(|| err.to_string()),
        },
    }
}
