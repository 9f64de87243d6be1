//! Temporal validity of allowlist entries.
//!
//! The reference date is always passed in. Nothing in this module reads the clock.

use auditgate_types::AllowlistEntry;
use time::{Date, Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryStatus {
    /// No `expires`: the entry never lapses.
    NoExpiry,
    /// Expires on the reference date, or after the look-ahead window.
    Valid,
    /// `expires` is before the reference date.
    Expired,
    /// Expires after the reference date but within the look-ahead window.
    ExpiringSoon,
}

impl ExpiryStatus {
    /// Whether a matched advisory is still allowed under this status.
    pub fn is_active(self) -> bool {
        !matches!(self, ExpiryStatus::Expired)
    }
}

pub fn evaluate(entry: &AllowlistEntry, reference_date: Date, window: Duration) -> ExpiryStatus {
    evaluate_date(entry.expires, reference_date, window)
}

/// Calendar-date comparison; the expiry date itself is still valid.
pub fn evaluate_date(
    expires: Option<Date>,
    reference_date: Date,
    window: Duration,
) -> ExpiryStatus {
    let Some(expires) = expires else {
        return ExpiryStatus::NoExpiry;
    };

    // Saturate instead of overflowing near the end of the supported date range.
    let horizon = reference_date.checked_add(window).unwrap_or(Date::MAX);

    if expires < reference_date {
        ExpiryStatus::Expired
    } else if expires == reference_date {
        ExpiryStatus::Valid
    } else if expires <= horizon {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Valid
    }
}
