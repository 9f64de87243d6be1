use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scanner severity scale, least to most severe.
///
/// Only `High` and `Critical` gate the verdict; the lower levels are parsed so that they can be
/// counted and dropped explicitly.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Low,
    Moderate,
    High,
    Critical,
}

impl Severity {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(Severity::Info),
            "low" => Some(Severity::Low),
            "moderate" => Some(Severity::Moderate),
            "high" => Some(Severity::High),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }

    /// True for the two levels that decide pass/fail.
    pub fn is_gated(self) -> bool {
        matches!(self, Severity::High | Severity::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of an advisory: the scanner's id (always as a string) plus the affected package.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub struct AdvisoryKey {
    pub id: String,
    pub package: String,
}

impl AdvisoryKey {
    pub fn new(id: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            package: package.into(),
        }
    }
}

impl fmt::Display for AdvisoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.package)
    }
}

/// A single finding from the external scanner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Advisory {
    pub id: String,
    pub package: String,
    pub severity: Severity,
    pub title: String,
    pub url: String,
}

impl Advisory {
    pub fn key(&self) -> AdvisoryKey {
        AdvisoryKey::new(self.id.clone(), self.package.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_puts_critical_last() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Moderate);
        assert!(Severity::Low > Severity::Info);
    }

    #[test]
    fn only_high_and_critical_are_gated() {
        assert!(Severity::Critical.is_gated());
        assert!(Severity::High.is_gated());
        assert!(!Severity::Moderate.is_gated());
        assert!(!Severity::Low.is_gated());
        assert!(!Severity::Info.is_gated());
    }

    #[test]
    fn severity_parse_matches_serde_names() {
        for sev in [
            Severity::Info,
            Severity::Low,
            Severity::Moderate,
            Severity::High,
            Severity::Critical,
        ] {
            let json = serde_json::to_string(&sev).unwrap();
            assert_eq!(json, format!("\"{}\"", sev.as_str()));
            assert_eq!(Severity::parse(sev.as_str()), Some(sev));
        }
        assert_eq!(Severity::parse("CRITICAL"), None);
        assert_eq!(Severity::parse("medium"), None);
    }
}
