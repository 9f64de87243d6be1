use crate::advisory::AdvisoryKey;
use crate::analysis::AnalysisResult;
use crate::dates::iso_date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Stable schema identifier for the report envelope.
pub const SCHEMA_REPORT_V1: &str = "auditgate.report.v1";

/// Coarse verdict mirrored from `AnalysisResult::is_successful` for CI surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn from_success(is_successful: bool) -> Self {
        if is_successful {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResultCounts {
    pub new: u32,
    pub allowed: u32,
    pub expired: u32,
    pub expiring: u32,
    /// Advisories below high severity, dropped before classification.
    pub filtered_out: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AllowlistInput {
    /// False when no allowlist file existed (strict mode).
    pub present: bool,
    pub entries: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditInput {
    /// Detected report format (`npm-v1`, `npm-v2`, `yarn-classic`).
    pub format: String,
    pub advisories: u32,
    pub sha256: String,
}

/// Digests of the raw inputs, so that a report can be tied back to what produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InputsMeta {
    pub allowlist: AllowlistInput,
    pub audit: AuditInput,
}

/// The JSON document written by `auditgate check`.
///
/// Only `started_at` and `finished_at` depend on the wall clock; `result` is a pure function of
/// the inputs and the reference date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "iso_date")]
    pub reference_date: Date,
    pub expiring_window_days: u32,
    pub verdict: Verdict,
    pub counts: ResultCounts,
    pub inputs: InputsMeta,

    /// Allowlist entries that matched no gated advisory in this run.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stale_entries: Vec<AdvisoryKey>,

    pub result: AnalysisResult,
}
