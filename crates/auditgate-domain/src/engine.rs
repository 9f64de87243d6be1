use crate::classify::classify;
use crate::expiry;
use crate::matcher::AllowlistIndex;
use crate::policy::EffectiveConfig;
use crate::report::DomainReport;
use crate::severity::filter_gated;
use auditgate_types::{
    Advisory, AllowlistEntry, AnalysisResult, ResultCounts, VulnerabilityInfo, VulnerabilityStatus,
};
use std::cmp::Ordering;
use time::Date;

/// Classify every advisory against the allowlist as of `reference_date`.
///
/// Pure: the same advisories, entries, date and window always produce the same report.
pub fn analyze<'a, I>(
    advisories: I,
    entries: &[AllowlistEntry],
    reference_date: Date,
    cfg: &EffectiveConfig,
) -> DomainReport
where
    I: IntoIterator<Item = &'a Advisory>,
{
    let (gated, filtered_out) = filter_gated(advisories);
    let index = AllowlistIndex::new(entries);
    let window = cfg.expiring_window();

    let mut used = vec![false; entries.len()];
    let mut result = AnalysisResult::default();

    for advisory in gated {
        let matched = index.lookup(advisory).map(|found| {
            used[found.index] = true;
            (found, expiry::evaluate(found.entry, reference_date, window))
        });

        let classification = classify(advisory, matched);
        if classification.expiring {
            result.expiring_entries.push(classification.info.clone());
        }
        match classification.info.status {
            VulnerabilityStatus::New => result.vulnerabilities.push(classification.info),
            VulnerabilityStatus::Allowed => {
                result.allowed_vulnerabilities.push(classification.info)
            }
            VulnerabilityStatus::Expired => {
                result.expired_allowlist_entries.push(classification.info)
            }
        }
    }

    // Deterministic ordering regardless of input order.
    result.vulnerabilities.sort_by(compare_infos);
    result.allowed_vulnerabilities.sort_by(compare_infos);
    result.expired_allowlist_entries.sort_by(compare_infos);
    result.expiring_entries.sort_by(compare_infos);

    result.is_successful =
        result.vulnerabilities.is_empty() && result.expired_allowlist_entries.is_empty();

    let counts = ResultCounts {
        new: result.vulnerabilities.len() as u32,
        allowed: result.allowed_vulnerabilities.len() as u32,
        expired: result.expired_allowlist_entries.len() as u32,
        expiring: result.expiring_entries.len() as u32,
        filtered_out,
    };

    let stale_entries = entries
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(entry, _)| entry.key())
        .collect();

    DomainReport {
        result,
        counts,
        stale_entries,
    }
}

fn compare_infos(a: &VulnerabilityInfo, b: &VulnerabilityInfo) -> Ordering {
    // Ordering priority:
    // 1) severity (critical -> high)
    // 2) package
    // 3) id
    b.severity
        .cmp(&a.severity)
        .then_with(|| a.package.cmp(&b.package))
        .then_with(|| a.id.cmp(&b.id))
}
