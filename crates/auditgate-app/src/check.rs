//! The `check` use case: classify scanner advisories against the allowlist and build a report.

use crate::error::AnalysisError;
use auditgate_allowlist::DuplicateKey;
use auditgate_domain::policy::EffectiveConfig;
use auditgate_types::{
    AllowlistInput, AuditInput, InputsMeta, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use sha2::{Digest, Sha256};
use time::{Date, OffsetDateTime};

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Allowlist file contents, or `None` if the file does not exist.
    pub allowlist_text: Option<&'a str>,
    /// Captured scanner output.
    pub audit_text: &'a str,
    /// Date against which allowlist expiry is evaluated.
    pub reference_date: Date,
    pub effective: &'a EffectiveConfig,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ReportEnvelope,
    /// Repeated allowlist keys; only the first occurrence of each can match.
    pub duplicates: Vec<DuplicateKey>,
}

/// Run the check use case: validate the allowlist, parse the audit output, classify.
///
/// Any input problem aborts the run with an [`AnalysisError`]; the verdict itself is data.
pub fn run_check(input: CheckInput<'_>) -> Result<CheckOutput, AnalysisError> {
    let span = tracing::info_span!("check", reference_date = %input.reference_date);
    let _enter = span.enter();

    let started_at = OffsetDateTime::now_utc();

    if input.allowlist_text.is_none() {
        tracing::warn!("no allowlist found; every high or critical advisory counts as new");
    }
    let allowlist = auditgate_allowlist::parse_allowlist(input.allowlist_text)?;
    for dup in &allowlist.duplicates {
        tracing::warn!(
            key = %dup.key,
            first = dup.first_index,
            duplicate = dup.duplicate_index,
            "duplicate allowlist entry; only the first one applies"
        );
    }

    let audit = auditgate_audit::parse_audit_report(input.audit_text)?;
    tracing::debug!(
        format = %audit.format,
        advisories = audit.advisories.len(),
        "parsed audit output"
    );

    let domain = auditgate_domain::analyze(
        audit.advisories.values(),
        &allowlist.entries,
        input.reference_date,
        input.effective,
    );

    for info in &domain.result.expiring_entries {
        tracing::warn!(
            id = %info.id,
            package = %info.package,
            expires_on = ?info.expires_on.map(auditgate_types::dates::format_date),
            "allowlist entry expires soon"
        );
    }
    if !domain.stale_entries.is_empty() {
        let keys: Vec<String> = domain.stale_entries.iter().map(|k| k.to_string()).collect();
        tracing::info!(
            count = keys.len(),
            entries = %keys.join(", "),
            "allowlist entries matched no high or critical advisory"
        );
    }
    tracing::info!(
        new = domain.counts.new,
        allowed = domain.counts.allowed,
        expired = domain.counts.expired,
        expiring = domain.counts.expiring,
        filtered_out = domain.counts.filtered_out,
        successful = domain.result.is_successful,
        "analysis complete"
    );

    let inputs = InputsMeta {
        allowlist: AllowlistInput {
            present: input.allowlist_text.is_some(),
            entries: allowlist.entries.len() as u32,
            sha256: input.allowlist_text.map(sha256_hex),
        },
        audit: AuditInput {
            format: audit.format.as_str().to_string(),
            advisories: audit.advisories.len() as u32,
            sha256: sha256_hex(input.audit_text),
        },
    };

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "auditgate".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        reference_date: input.reference_date,
        expiring_window_days: input.effective.expiring_window_days,
        verdict: Verdict::from_success(domain.result.is_successful),
        counts: domain.counts,
        inputs,
        stale_entries: domain.stale_entries,
        result: domain.result,
    };

    Ok(CheckOutput {
        report,
        duplicates: allowlist.duplicates,
    })
}

fn sha256_hex(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

/// Map verdict to exit code: 0 = pass, 1 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    }
}
