//! Explain registry for statuses and error codes.
//!
//! Maps status and code identifiers to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a status or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the status/code.
    pub title: &'static str,
    /// What it means and when it is produced.
    pub description: &'static str,
    /// What to do about it.
    pub remediation: &'static str,
    /// Before/after allowlist examples.
    pub examples: ExamplePair,
}

/// Before and after examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Input that produces the status/code.
    pub before: &'static str,
    /// Input that resolves it.
    pub after: &'static str,
}

/// Look up an explanation by status or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Statuses
        ids::STATUS_NEW => Some(explain_new()),
        ids::STATUS_ALLOWED => Some(explain_allowed()),
        ids::STATUS_EXPIRED => Some(explain_expired()),
        ids::STATUS_EXPIRING_SOON => Some(explain_expiring_soon()),

        // Codes
        ids::CODE_ALLOWLIST_INVALID => Some(explain_allowlist_invalid()),
        ids::CODE_AUDIT_REPORT_INVALID => Some(explain_audit_report_invalid()),
        ids::CODE_CONFIG_INVALID => Some(explain_config_invalid()),

        _ => None,
    }
}

/// List all known statuses.
pub fn all_statuses() -> &'static [&'static str] {
    &[
        ids::STATUS_NEW,
        ids::STATUS_ALLOWED,
        ids::STATUS_EXPIRED,
        ids::STATUS_EXPIRING_SOON,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_ALLOWLIST_INVALID,
        ids::CODE_AUDIT_REPORT_INVALID,
        ids::CODE_CONFIG_INVALID,
    ]
}

// --- Status explanations ---

fn explain_new() -> Explanation {
    Explanation {
        title: "New Vulnerability",
        description: "\
A high or critical advisory reported by the scanner has no matching allowlist entry.

Matching is exact and case-sensitive on the pair (advisory id, package name).
A new vulnerability fails the run.",
        remediation: "\
Prefer fixing the vulnerability:
- Upgrade the affected package (or the dependency that pulls it in)
- Use `npm audit fix` or an `overrides` entry to force a patched version

If the risk is accepted, add an allowlist entry with a reason and an expiry date
so that the exception is reviewed again later.",
        examples: ExamplePair {
            before: r#"[]"#,
            after: r#"[
  {
    "id": "1001",
    "package": "lodash",
    "reason": "Only reachable from build tooling; no fix available",
    "expires": "2025-06-30"
  }
]"#,
        },
    }
}

fn explain_allowed() -> Explanation {
    Explanation {
        title: "Allowed Vulnerability",
        description: "\
A high or critical advisory matches an allowlist entry that has not expired.

Entries without an `expires` date never lapse. Allowed vulnerabilities are
informational and never fail the run.",
        remediation: "\
No action is required. Revisit the entry when its expiry approaches, and remove
it once the vulnerable package has been upgraded.",
        examples: ExamplePair {
            before: r#"{ "id": "1001", "package": "lodash", "reason": "no fix" }"#,
            after: r#"{ "id": "1001", "package": "lodash", "reason": "no fix", "expires": "2025-06-30" }"#,
        },
    }
}

fn explain_expired() -> Explanation {
    Explanation {
        title: "Expired Allowlist Entry",
        description: "\
A high or critical advisory matches an allowlist entry whose `expires` date is
before the reference date. The expiry date itself is still valid.

An expired entry fails the run, exactly like a new vulnerability.",
        remediation: "\
Re-evaluate the accepted risk:
- Upgrade the package and delete the entry, or
- Extend `expires` after a fresh review and update `reviewedOn`",
        examples: ExamplePair {
            before: r#"{ "id": "1001", "package": "lodash", "reason": "no fix", "expires": "2020-01-01" }"#,
            after: r#"{ "id": "1001", "package": "lodash", "reason": "still no fix upstream", "expires": "2025-12-31", "reviewedOn": "2025-06-01" }"#,
        },
    }
}

fn explain_expiring_soon() -> Explanation {
    Explanation {
        title: "Allowlist Entry Expiring Soon",
        description: "\
A matched allowlist entry expires within the look-ahead window (30 days by
default) after the reference date. The advisory is still allowed and the run
still passes; the entry is listed separately for operator attention.",
        remediation: "\
Schedule a review before the expiry date: upgrade and remove the entry, or
extend `expires` after re-assessing the risk.",
        examples: ExamplePair {
            before: r#"{ "id": "1001", "package": "lodash", "reason": "no fix", "expires": "2025-01-10" }"#,
            after: r#"{ "id": "1001", "package": "lodash", "reason": "no fix", "expires": "2025-04-10", "reviewedOn": "2025-01-05" }"#,
        },
    }
}

// --- Code explanations ---

fn explain_allowlist_invalid() -> Explanation {
    Explanation {
        title: "Invalid Allowlist",
        description: "\
The allowlist could not be used: it is not valid JSON, is not an array, or an
entry violates the schema. The analysis does not run, and a broken allowlist is
never treated as an empty one.

Every entry must have non-empty `id`, `package`, and `reason`. `expires` and
`reviewedOn` must be calendar dates (`YYYY-MM-DD`). Unknown fields are rejected.",
        remediation: "\
Fix each reported field path, then re-run `auditgate validate` to confirm.",
        examples: ExamplePair {
            before: r#"[{ "id": "1001", "pacakge": "lodash", "reason": "", "expires": "2025-02-30" }]"#,
            after: r#"[{ "id": "1001", "package": "lodash", "reason": "no fix", "expires": "2025-02-28" }]"#,
        },
    }
}

fn explain_audit_report_invalid() -> Explanation {
    Explanation {
        title: "Invalid Audit Report",
        description: "\
The scanner output could not be parsed as a known audit report shape
(npm v1 `advisories`, npm v2 `vulnerabilities`, or yarn classic NDJSON), or the
scanner itself reported an error. The scanner's exit status is not used to make
this decision.",
        remediation: "\
Run the scanner by hand and inspect its output:
- `npm audit --json` requires a lockfile (`npm i --package-lock-only`)
- Registry or network failures show up as an `error` object in the output",
        examples: ExamplePair {
            before: r#"npm ERR! code ENOLOCK"#,
            after: r#"{ "auditReportVersion": 2, "vulnerabilities": {} }"#,
        },
    }
}

fn explain_config_invalid() -> Explanation {
    Explanation {
        title: "Invalid Configuration",
        description: "\
`auditgate.toml` could not be parsed or contains an out-of-range value
(for example `expiring_window_days` outside 1..=365) or an unknown key.",
        remediation: "\
Fix the reported key, or delete the file to fall back to defaults.",
        examples: ExamplePair {
            before: r#"expiring_window_days = 0"#,
            after: r#"expiring_window_days = 30"#,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_status() {
        assert!(lookup_explanation(ids::STATUS_NEW).is_some());
        assert!(lookup_explanation(ids::STATUS_ALLOWED).is_some());
        assert!(lookup_explanation(ids::STATUS_EXPIRED).is_some());
        assert!(lookup_explanation(ids::STATUS_EXPIRING_SOON).is_some());
    }

    #[test]
    fn lookup_unknown_returns_none() {
        assert!(lookup_explanation("unknown_status").is_none());
        assert!(lookup_explanation("NEW").is_none());
    }

    #[test]
    fn every_listed_identifier_has_content() {
        for id in all_statuses().iter().chain(all_codes()) {
            let exp = lookup_explanation(id)
                .unwrap_or_else(|| panic!("{id} should be in registry"));
            assert!(!exp.title.is_empty());
            assert!(!exp.description.is_empty());
            assert!(!exp.remediation.is_empty());
        }
    }
}
