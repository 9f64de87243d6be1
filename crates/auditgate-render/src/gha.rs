use crate::{RenderableCategory, RenderableReport};

/// Render categorized vulnerabilities as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title={title}::{message}`
///
/// Blocking categories are errors, expiring entries are warnings, and unused allowlist entries
/// are notices. Allowed vulnerabilities produce no annotation.
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for category in RenderableCategory::ALL {
        let level = match category {
            RenderableCategory::New | RenderableCategory::Expired => "error",
            RenderableCategory::ExpiringSoon => "warning",
            RenderableCategory::Allowed => continue,
        };

        for v in report.category(category) {
            let mut message = format!(
                "[auditgate:{}] {} {} in {}: {}",
                category.code(),
                v.severity,
                v.id,
                v.package,
                v.title
            );
            if let Some(expires) = &v.expires_on {
                message.push_str(&format!(" (allowlist expires {expires})"));
            }
            if !v.url.is_empty() {
                message.push_str(&format!(" {}", v.url));
            }
            out.push(format!(
                "::{} title={}::{}",
                level,
                escape_property(category.heading()),
                escape_data(&message)
            ));
        }
    }

    for key in &report.stale_entries {
        out.push(format!(
            "::notice title=Unused allowlist entry::{}",
            escape_data(&format!(
                "[auditgate:stale] {key} matched no high or critical advisory"
            ))
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{empty_report, mixed_report, vuln};

    #[test]
    fn empty_report_has_no_annotations() {
        assert!(render_github_annotations(&empty_report()).is_empty());
    }

    #[test]
    fn levels_follow_category() {
        let lines = render_github_annotations(&mixed_report());
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with(
            "::error title=New vulnerabilities::[auditgate:new] critical 1001 in lodash"
        ));
        assert!(
            lines[1].starts_with("::error title=Expired allowlist entries::[auditgate:expired]")
        );
        assert!(lines[1].contains("(allowlist expires 2020-01-01)"));
        assert!(lines[2].starts_with("::warning title=Allowlist entries expiring soon::"));
        assert_eq!(
            lines[3],
            "::notice title=Unused allowlist entry::[auditgate:stale] 4242@left-pad matched no high or critical advisory"
        );
    }

    #[test]
    fn escapes_workflow_command_data() {
        let mut report = empty_report();
        let mut v = vuln("1", "a", "high", None, None);
        v.title = "100% bad\nreally".to_string();
        report.new.push(v);

        let lines = render_github_annotations(&report);
        assert!(lines[0].contains("100%25 bad%0Areally"));
    }
}
