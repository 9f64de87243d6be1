//! Render use cases: Markdown, console text, and GitHub annotations from a report.

use crate::report::to_renderable;
use anyhow::Context;
use auditgate_types::ReportEnvelope;
use camino::Utf8Path;

pub fn render_markdown(report: &ReportEnvelope) -> String {
    auditgate_render::render_markdown(&to_renderable(report))
}

pub fn render_text(report: &ReportEnvelope) -> String {
    auditgate_render::render_text(&to_renderable(report))
}

pub fn render_annotations(report: &ReportEnvelope, max: usize) -> Vec<String> {
    auditgate_render::render_github_annotations(&to_renderable(report))
        .into_iter()
        .take(max)
        .collect()
}

/// Write a text artifact, creating parent directories as needed.
pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

pub(crate) fn write_bytes(path: &Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create dir {parent}"))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::parse_report_json;

    const REPORT: &str = r#"{
  "schema": "auditgate.report.v1",
  "tool": { "name": "auditgate", "version": "0.1.0" },
  "started_at": "2025-01-01T00:00:00Z",
  "finished_at": "2025-01-01T00:00:01Z",
  "reference_date": "2025-01-01",
  "expiring_window_days": 30,
  "verdict": "fail",
  "counts": { "new": 2, "allowed": 0, "expired": 0, "expiring": 0, "filtered_out": 0 },
  "inputs": {
    "allowlist": { "present": false, "entries": 0 },
    "audit": { "format": "npm-v1", "advisories": 2, "sha256": "00" }
  },
  "result": {
    "vulnerabilities": [
      { "id": "1001", "package": "lodash", "severity": "critical", "title": "Prototype Pollution", "url": "https://npmjs.com/advisories/1001", "status": "NEW" },
      { "id": "1002", "package": "qs", "severity": "high", "title": "Prototype Pollution", "url": "https://npmjs.com/advisories/1002", "status": "NEW" }
    ],
    "allowedVulnerabilities": [],
    "expiredAllowlistEntries": [],
    "expiringEntries": [],
    "isSuccessful": false
  }
}"#;

    #[test]
    fn render_annotations_respects_max() {
        let report = parse_report_json(REPORT).expect("parse");
        assert_eq!(render_annotations(&report, 10).len(), 2);
        assert_eq!(render_annotations(&report, 1).len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        let report = parse_report_json(REPORT).expect("parse");
        let markdown = render_markdown(&report);
        assert!(markdown.contains("## New vulnerabilities (2)"));
        assert!(markdown.contains("Verdict: **FAIL**"));
    }

    #[test]
    fn render_text_smoke() {
        let report = parse_report_json(REPORT).expect("parse");
        let text = render_text(&report);
        assert!(text.contains("lodash 1001 [critical]"));
        assert!(text.contains("auditgate: FAIL"));
    }

    #[test]
    fn write_text_writes_file() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("out/summary.md");
        write_text(&path, "# hi\n").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "# hi\n");
    }
}
