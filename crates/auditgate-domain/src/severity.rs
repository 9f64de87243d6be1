//! Severity gate: only high and critical advisories take part in classification.

use auditgate_types::Advisory;

pub fn passes(advisory: &Advisory) -> bool {
    advisory.severity.is_gated()
}

/// Split advisories into the gated set (input order preserved) and a count of dropped ones.
pub fn filter_gated<'a, I>(advisories: I) -> (Vec<&'a Advisory>, u32)
where
    I: IntoIterator<Item = &'a Advisory>,
{
    let mut kept = Vec::new();
    let mut dropped = 0u32;
    for advisory in advisories {
        if passes(advisory) {
            kept.push(advisory);
        } else {
            dropped += 1;
        }
    }
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::advisory;
    use auditgate_types::Severity;

    #[test]
    fn keeps_only_high_and_critical() {
        let all = vec![
            advisory("1", "a", Severity::Info),
            advisory("2", "b", Severity::Low),
            advisory("3", "c", Severity::Moderate),
            advisory("4", "d", Severity::High),
            advisory("5", "e", Severity::Critical),
        ];
        let (kept, dropped) = filter_gated(&all);
        let ids: Vec<&str> = kept.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "5"]);
        assert_eq!(dropped, 3);
    }
}
