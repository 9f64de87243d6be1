//! Audit report adapters: turn captured scanner output into a keyed set of advisories.
//!
//! This crate does no IO and never looks at the scanner's exit status. `npm audit` exits
//! non-zero whenever it finds anything, so parseability is decided from the payload alone.

#![forbid(unsafe_code)]

mod error;
mod format;
mod npm_v1;
mod npm_v2;
mod payload;
mod yarn;

use auditgate_types::{Advisory, AdvisoryKey, Severity};
use std::collections::BTreeMap;

pub use error::AuditReportError;
pub use format::{AuditFormat, RawReport, detect_report};

/// Normalised scanner output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    pub format: AuditFormat,
    /// Every advisory, any severity, keyed by `(id, package)`.
    pub advisories: BTreeMap<AdvisoryKey, Advisory>,
}

/// Parse captured scanner output.
///
/// Fails on anything that is not a recognised report shape; there are no partial results.
pub fn parse_audit_report(text: &str) -> Result<AuditReport, AuditReportError> {
    let raw = detect_report(text)?;
    let format = raw.format();
    let records = match raw {
        RawReport::NpmV1(report) => npm_v1::advisories(report),
        RawReport::NpmV2(report) => npm_v2::advisories(report),
        RawReport::YarnClassic(lines) => yarn::advisories(lines)?,
    };

    let mut advisories = BTreeMap::new();
    for record in records {
        let advisory = record.into_advisory()?;
        // First occurrence wins; transitive paths repeat the same advisory.
        advisories.entry(advisory.key()).or_insert(advisory);
    }

    Ok(AuditReport { format, advisories })
}

/// Scanner-agnostic advisory fields, before severity validation.
#[derive(Clone, Debug)]
pub(crate) struct AdvisoryRecord {
    pub id: String,
    pub package: String,
    pub severity: String,
    pub title: String,
    pub url: String,
}

impl AdvisoryRecord {
    fn into_advisory(self) -> Result<Advisory, AuditReportError> {
        let severity =
            Severity::parse(&self.severity).ok_or_else(|| AuditReportError::UnknownSeverity {
                id: self.id.clone(),
                severity: self.severity.clone(),
            })?;
        Ok(Advisory {
            id: self.id,
            package: self.package,
            severity,
            title: self.title,
            url: self.url,
        })
    }
}

/// Advisory ids arrive as numbers (npm, yarn) or strings (GHSA ids); both compare as strings.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}
