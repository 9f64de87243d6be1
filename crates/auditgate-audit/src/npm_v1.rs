//! npm 6 `npm audit --json`.
//!
//! ```json
//! { "advisories": { "1001": { "id": 1001, "module_name": "lodash", "severity": "critical",
//!                             "title": "...", "url": "..." } } }
//! ```

use crate::{AdvisoryRecord, RawId};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
pub struct Report {
    pub advisories: BTreeMap<String, Advisory>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Advisory {
    /// Falls back to the map key when absent.
    #[serde(default)]
    id: Option<RawId>,
    module_name: String,
    severity: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

pub(crate) fn advisories(report: Report) -> Vec<AdvisoryRecord> {
    report
        .advisories
        .into_iter()
        .map(|(key, adv)| AdvisoryRecord {
            id: adv.id.map(RawId::into_string).unwrap_or(key),
            package: adv.module_name,
            severity: adv.severity,
            title: adv.title,
            url: adv.url,
        })
        .collect()
}
