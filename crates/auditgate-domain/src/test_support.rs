use auditgate_types::{Advisory, AllowlistEntry, Severity};
use time::Date;

pub(crate) fn advisory(id: &str, package: &str, severity: Severity) -> Advisory {
    Advisory {
        id: id.to_string(),
        package: package.to_string(),
        severity,
        title: format!("{package} advisory {id}"),
        url: format!("https://github.com/advisories/{id}"),
    }
}

pub(crate) fn entry(
    id: &str,
    package: &str,
    reason: &str,
    expires: Option<Date>,
) -> AllowlistEntry {
    AllowlistEntry {
        id: id.to_string(),
        package: package.to_string(),
        reason: reason.to_string(),
        notes: None,
        expires,
        reviewed_on: None,
    }
}
