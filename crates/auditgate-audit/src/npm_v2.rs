//! npm 7+ `npm audit --json` (`auditReportVersion: 2`).
//!
//! Vulnerabilities are keyed by package name. Each `via` element is either an advisory object
//! (`source` is the advisory id) or the name of another vulnerable package it depends on; only
//! the objects carry advisories.

use crate::{AdvisoryRecord, RawId};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub vulnerabilities: BTreeMap<String, Vulnerability>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    via: Vec<Via>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum Via {
    Advisory(ViaAdvisory),
    Package(String),
}

#[derive(Clone, Debug, Deserialize)]
struct ViaAdvisory {
    source: RawId,
    name: String,
    severity: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
}

pub(crate) fn advisories(report: Report) -> Vec<AdvisoryRecord> {
    report
        .vulnerabilities
        .into_values()
        .flat_map(|vuln| vuln.via)
        .filter_map(|via| match via {
            Via::Advisory(adv) => Some(AdvisoryRecord {
                id: adv.source.into_string(),
                package: adv.name,
                severity: adv.severity,
                title: adv.title,
                url: adv.url,
            }),
            Via::Package(_) => None,
        })
        .collect()
}
