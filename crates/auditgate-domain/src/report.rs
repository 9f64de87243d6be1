use auditgate_types::{AdvisoryKey, AnalysisResult, ResultCounts};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainReport {
    pub result: AnalysisResult,
    pub counts: ResultCounts,
    /// Allowlist entries (in list order) that matched no gated advisory.
    pub stale_entries: Vec<AdvisoryKey>,
}
