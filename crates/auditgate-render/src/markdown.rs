use crate::{RenderableCategory, RenderableReport, RenderableVulnerability};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Auditgate report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Reference date: {}\n- New: {} / Expired: {} / Expiring within {} days: {} / Allowed: {}\n- Below high severity (ignored): {}\n\n",
        report.verdict.label(),
        report.reference_date,
        report.new.len(),
        report.expired.len(),
        report.expiring_window_days,
        report.expiring.len(),
        report.allowed.len(),
        report.filtered_out,
    ));

    let total: usize = RenderableCategory::ALL
        .iter()
        .map(|c| report.category(*c).len())
        .sum();
    if total == 0 {
        out.push_str("No high or critical vulnerabilities.\n");
    }

    for category in RenderableCategory::ALL {
        let items = report.category(category);
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("## {} ({})\n\n", category.heading(), items.len()));
        out.push_str("| Severity | Package | Advisory | Title | Reason | Expires |\n");
        out.push_str("|---|---|---|---|---|---|\n");
        for v in items {
            out.push_str(&table_row(v));
        }
        out.push('\n');
    }

    if !report.stale_entries.is_empty() {
        out.push_str("## Unused allowlist entries\n\n");
        out.push_str(
            "These entries matched no high or critical advisory and can likely be removed.\n\n",
        );
        for key in &report.stale_entries {
            out.push_str(&format!("- `{}`\n", key));
        }
    }

    out
}

fn table_row(v: &RenderableVulnerability) -> String {
    format!(
        "| {} | `{}` | [{}]({}) | {} | {} | {} |\n",
        v.severity,
        cell(&v.package),
        cell(&v.id),
        v.url,
        cell(&v.title),
        v.reason.as_deref().map(cell).unwrap_or_default(),
        v.expires_on.as_deref().unwrap_or(""),
    )
}

fn cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\r', '\n'], " ")
}
