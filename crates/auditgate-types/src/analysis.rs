use crate::advisory::Severity;
use crate::dates::iso_date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;

/// Final classification of a gated advisory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum VulnerabilityStatus {
    New,
    Expired,
    Allowed,
}

/// Output record for a single high/critical advisory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityInfo {
    pub id: String,
    pub package: String,
    pub severity: Severity,
    pub title: String,
    pub url: String,
    pub status: VulnerabilityStatus,

    /// Allowlist reason, for matched advisories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// Allowlist expiry, for matched advisories whose entry carries one.
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub expires_on: Option<Date>,
}

/// The categorized breakdown plus verdict for one run.
///
/// `expiring_entries` is a subset of `allowed_vulnerabilities`; the two lists overlap on purpose.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub vulnerabilities: Vec<VulnerabilityInfo>,
    pub allowed_vulnerabilities: Vec<VulnerabilityInfo>,
    pub expired_allowlist_entries: Vec<VulnerabilityInfo>,
    pub expiring_entries: Vec<VulnerabilityInfo>,
    pub is_successful: bool,
}
