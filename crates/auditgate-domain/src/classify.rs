//! Final status assignment for a single gated advisory.

use crate::expiry::ExpiryStatus;
use crate::matcher::EntryMatch;
use auditgate_types::{Advisory, VulnerabilityInfo, VulnerabilityStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    pub info: VulnerabilityInfo,
    /// Allowed, but the entry lapses within the look-ahead window.
    pub expiring: bool,
}

/// `matched` carries the allowlist entry (if any) and its evaluated expiry.
pub fn classify(
    advisory: &Advisory,
    matched: Option<(EntryMatch<'_>, ExpiryStatus)>,
) -> Classification {
    let Some((found, expiry)) = matched else {
        return Classification {
            info: to_info(advisory, VulnerabilityStatus::New, None),
            expiring: false,
        };
    };

    let status = if expiry.is_active() {
        VulnerabilityStatus::Allowed
    } else {
        VulnerabilityStatus::Expired
    };

    Classification {
        info: to_info(advisory, status, Some(found)),
        expiring: expiry == ExpiryStatus::ExpiringSoon,
    }
}

fn to_info(
    advisory: &Advisory,
    status: VulnerabilityStatus,
    found: Option<EntryMatch<'_>>,
) -> VulnerabilityInfo {
    VulnerabilityInfo {
        id: advisory.id.clone(),
        package: advisory.package.clone(),
        severity: advisory.severity,
        title: advisory.title.clone(),
        url: advisory.url.clone(),
        status,
        reason: found.map(|m| m.entry.reason.clone()),
        expires_on: found.and_then(|m| m.entry.expires),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{advisory, entry};
    use auditgate_types::Severity;
    use time::macros::date;

    #[test]
    fn unmatched_is_new_without_allowlist_fields() {
        let c = classify(&advisory("1", "a", Severity::High), None);
        assert_eq!(c.info.status, VulnerabilityStatus::New);
        assert_eq!(c.info.reason, None);
        assert_eq!(c.info.expires_on, None);
        assert!(!c.expiring);
    }

    #[test]
    fn matched_statuses() {
        let e = entry("1", "a", "accepted", Some(date!(2025 - 01 - 10)));
        let found = EntryMatch {
            index: 0,
            entry: &e,
        };
        let adv = advisory("1", "a", Severity::Critical);

        let expired = classify(&adv, Some((found, ExpiryStatus::Expired)));
        assert_eq!(expired.info.status, VulnerabilityStatus::Expired);
        assert_eq!(expired.info.reason.as_deref(), Some("accepted"));
        assert_eq!(expired.info.expires_on, Some(date!(2025 - 01 - 10)));
        assert!(!expired.expiring);

        let soon = classify(&adv, Some((found, ExpiryStatus::ExpiringSoon)));
        assert_eq!(soon.info.status, VulnerabilityStatus::Allowed);
        assert!(soon.expiring);

        let valid = classify(&adv, Some((found, ExpiryStatus::Valid)));
        assert_eq!(valid.info.status, VulnerabilityStatus::Allowed);
        assert!(!valid.expiring);
    }
}
