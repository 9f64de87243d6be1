//! Report envelope (de)serialization and conversion to the render model.

use anyhow::Context;
use auditgate_render::{RenderableReport, RenderableVerdict, RenderableVulnerability};
use auditgate_types::dates::format_date;
use auditgate_types::{ReportEnvelope, SCHEMA_REPORT_V1, Verdict, VulnerabilityInfo};
use camino::Utf8Path;

pub fn parse_report_json(text: &str) -> anyhow::Result<ReportEnvelope> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse auditgate report")
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    crate::render::write_bytes(path, &bytes)
}

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    let convert = |list: &[VulnerabilityInfo]| list.iter().map(renderable_vuln).collect();
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        reference_date: format_date(report.reference_date),
        expiring_window_days: report.expiring_window_days,
        new: convert(&report.result.vulnerabilities),
        expired: convert(&report.result.expired_allowlist_entries),
        expiring: convert(&report.result.expiring_entries),
        allowed: convert(&report.result.allowed_vulnerabilities),
        filtered_out: report.counts.filtered_out,
        stale_entries: report.stale_entries.iter().map(|k| k.to_string()).collect(),
    }
}

fn renderable_vuln(info: &VulnerabilityInfo) -> RenderableVulnerability {
    RenderableVulnerability {
        id: info.id.clone(),
        package: info.package.clone(),
        severity: info.severity.as_str().to_string(),
        title: info.title.clone(),
        url: info.url.clone(),
        reason: info.reason.clone(),
        expires_on: info.expires_on.map(format_date),
    }
}
