//! The `explain` use case: look up status and error-code documentation.

use auditgate_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available statuses and codes.
    NotFound {
        identifier: String,
        available_statuses: &'static [&'static str],
        available_codes: &'static [&'static str],
    },
}

/// Look up an explanation for a status or code.
///
/// Matching is case-insensitive and accepts `-` for `_`, so `EXPIRING-SOON` finds
/// `expiring_soon`.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let normalized = identifier.trim().to_ascii_lowercase().replace('-', "_");
    match explain::lookup_explanation(&normalized) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_statuses: explain::all_statuses(),
            available_codes: explain::all_codes(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After:\n");
    out.push_str("```json\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(
    identifier: &str,
    statuses: &[&'static str],
    codes: &[&'static str],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown status or code: {}\n\n", identifier));
    out.push_str("Available statuses:\n");
    for status in statuses {
        out.push_str(&format!("  - {}\n", status));
    }
    out.push_str("\nAvailable codes:\n");
    for code in codes {
        out.push_str(&format!("  - {}\n", code));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_status() {
        let output = run_explain("expired");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_known_code() {
        let output = run_explain("audit_report_invalid");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_normalizes_case_and_dashes() {
        let output = run_explain("EXPIRING-SOON");
        let exp = unwrap_found(output);
        assert!(exp.title.contains("Expiring"), "{}", exp.title);
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let ExplainOutput::NotFound {
            identifier,
            available_statuses,
            available_codes,
        } = output
        else {
            panic!("expected NotFound");
        };
        assert_eq!(identifier, "not_a_real_thing");
        assert_eq!(available_statuses.len(), 4);
        assert_eq!(available_codes.len(), 3);
    }

    #[test]
    fn format_explanation_output() {
        let exp = unwrap_found(run_explain("new"));
        let formatted = format_explanation(&exp);
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("Examples"));
        assert!(formatted.contains("```json"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["new", "allowed"], &["config_invalid"]);
        assert!(formatted.contains("Unknown status or code: missing"));
        assert!(formatted.contains("Available statuses:"));
        assert!(formatted.contains("  - allowed"));
        assert!(formatted.contains("Available codes:"));
        assert!(formatted.contains("  - config_invalid"));
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }
}
