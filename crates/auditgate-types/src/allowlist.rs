use crate::advisory::AdvisoryKey;
use crate::dates::iso_date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::Date;

/// One accepted risk in the allowlist document.
///
/// Instances are produced by the allowlist validator, which enforces the closed schema; the serde
/// derives exist for schema publication and for echoing entries back in reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AllowlistEntry {
    /// Advisory id as reported by the scanner.
    pub id: String,
    /// Affected package name.
    pub package: String,
    /// Why the risk is accepted.
    pub reason: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Last day on which the entry still applies.
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub expires: Option<Date>,

    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date::option", skip_serializing_if = "Option::is_none")]
    pub reviewed_on: Option<Date>,
}

impl AllowlistEntry {
    pub fn key(&self) -> AdvisoryKey {
        AdvisoryKey::new(self.id.clone(), self.package.clone())
    }
}
