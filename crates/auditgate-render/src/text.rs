use crate::{RenderableCategory, RenderableReport, RenderableVulnerability};

/// Plain-text console summary, one block per non-empty category.
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();

    for category in RenderableCategory::ALL {
        let items = report.category(category);
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("{} ({}):\n", category.heading(), items.len()));
        for v in items {
            out.push_str(&line(category, v));
        }
        out.push('\n');
    }

    if !report.stale_entries.is_empty() {
        out.push_str(&format!(
            "Unused allowlist entries ({}): {}\n\n",
            report.stale_entries.len(),
            report.stale_entries.join(", ")
        ));
    }

    out.push_str(&format!(
        "auditgate: {} (new: {}, expired: {}, expiring: {}, allowed: {}, ignored below high: {}; reference date {})\n",
        report.verdict.label(),
        report.new.len(),
        report.expired.len(),
        report.expiring.len(),
        report.allowed.len(),
        report.filtered_out,
        report.reference_date,
    ));

    out
}

fn line(category: RenderableCategory, v: &RenderableVulnerability) -> String {
    let mut s = format!("  - {} {} [{}] {}", v.package, v.id, v.severity, v.title);
    if category != RenderableCategory::New {
        if let Some(reason) = &v.reason {
            s.push_str(&format!("\n      reason: {reason}"));
        }
        match (&v.expires_on, category) {
            (Some(date), RenderableCategory::Expired) => {
                s.push_str(&format!("\n      expired: {date}"))
            }
            (Some(date), _) => s.push_str(&format!("\n      expires: {date}")),
            (None, _) => {}
        }
    }
    if !v.url.is_empty() {
        s.push_str(&format!("\n      {}", v.url));
    }
    s.push('\n');
    s
}
