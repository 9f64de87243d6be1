#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Fail,
}

impl RenderableVerdict {
    pub fn label(self) -> &'static str {
        match self {
            RenderableVerdict::Pass => "PASS",
            RenderableVerdict::Fail => "FAIL",
        }
    }
}

/// Output sections, in the order they are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableCategory {
    New,
    Expired,
    ExpiringSoon,
    Allowed,
}

impl RenderableCategory {
    pub const ALL: [RenderableCategory; 4] = [
        RenderableCategory::New,
        RenderableCategory::Expired,
        RenderableCategory::ExpiringSoon,
        RenderableCategory::Allowed,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            RenderableCategory::New => "New vulnerabilities",
            RenderableCategory::Expired => "Expired allowlist entries",
            RenderableCategory::ExpiringSoon => "Allowlist entries expiring soon",
            RenderableCategory::Allowed => "Allowed vulnerabilities",
        }
    }

    /// Stable status code, as accepted by `explain`.
    pub fn code(self) -> &'static str {
        match self {
            RenderableCategory::New => "new",
            RenderableCategory::Expired => "expired",
            RenderableCategory::ExpiringSoon => "expiring_soon",
            RenderableCategory::Allowed => "allowed",
        }
    }

    /// Whether entries in this category fail the run.
    pub fn is_blocking(self) -> bool {
        matches!(self, RenderableCategory::New | RenderableCategory::Expired)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableVulnerability {
    pub id: String,
    pub package: String,
    pub severity: String,
    pub title: String,
    pub url: String,
    pub reason: Option<String>,
    /// `YYYY-MM-DD`.
    pub expires_on: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    /// `YYYY-MM-DD`.
    pub reference_date: String,
    pub expiring_window_days: u32,
    pub new: Vec<RenderableVulnerability>,
    pub expired: Vec<RenderableVulnerability>,
    pub expiring: Vec<RenderableVulnerability>,
    pub allowed: Vec<RenderableVulnerability>,
    /// Advisories dropped by the severity gate.
    pub filtered_out: u32,
    /// `id@package` of allowlist entries that matched nothing.
    pub stale_entries: Vec<String>,
}

impl RenderableReport {
    pub fn category(&self, category: RenderableCategory) -> &[RenderableVulnerability] {
        match category {
            RenderableCategory::New => &self.new,
            RenderableCategory::Expired => &self.expired,
            RenderableCategory::ExpiringSoon => &self.expiring,
            RenderableCategory::Allowed => &self.allowed,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn vuln(
        id: &str,
        package: &str,
        severity: &str,
        reason: Option<&str>,
        expires_on: Option<&str>,
    ) -> RenderableVulnerability {
        RenderableVulnerability {
            id: id.to_string(),
            package: package.to_string(),
            severity: severity.to_string(),
            title: format!("Issue in {package}"),
            url: format!("https://github.com/advisories/{id}"),
            reason: reason.map(str::to_string),
            expires_on: expires_on.map(str::to_string),
        }
    }

    pub(crate) fn empty_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Pass,
            reference_date: "2025-01-01".to_string(),
            expiring_window_days: 30,
            new: Vec::new(),
            expired: Vec::new(),
            expiring: Vec::new(),
            allowed: Vec::new(),
            filtered_out: 0,
            stale_entries: Vec::new(),
        }
    }

    pub(crate) fn mixed_report() -> RenderableReport {
        let soon = vuln(
            "1003",
            "minimist",
            "high",
            Some("waiting on upstream"),
            Some("2025-01-11"),
        );
        RenderableReport {
            verdict: RenderableVerdict::Fail,
            new: vec![vuln("1001", "lodash", "critical", None, None)],
            expired: vec![vuln(
                "1002",
                "axios",
                "high",
                Some("dev only"),
                Some("2020-01-01"),
            )],
            expiring: vec![soon.clone()],
            allowed: vec![soon],
            filtered_out: 3,
            stale_entries: vec!["4242@left-pad".to_string()],
            ..empty_report()
        }
    }
}
