//! Stable DTOs and IDs used across the auditgate workspace.
//!
//! This crate is intentionally boring:
//! - data types for advisories, allowlist entries, and the analysis result
//! - the emitted report envelope
//! - stable string IDs and codes
//! - explain registry for statuses and error codes

#![forbid(unsafe_code)]

pub mod advisory;
pub mod allowlist;
pub mod analysis;
pub mod dates;
pub mod explain;
pub mod ids;
pub mod receipt;

pub use advisory::{Advisory, AdvisoryKey, Severity};
pub use allowlist::AllowlistEntry;
pub use analysis::{AnalysisResult, VulnerabilityInfo, VulnerabilityStatus};
pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    AllowlistInput, AuditInput, InputsMeta, ReportEnvelope, ResultCounts, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
