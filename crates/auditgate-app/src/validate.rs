//! The `validate` use case: check an allowlist without running the scanner.

use auditgate_allowlist::{AllowlistError, DuplicateKey, FieldError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidateOutput {
    Valid {
        entries: usize,
        duplicates: Vec<DuplicateKey>,
    },
    Invalid {
        message: String,
        errors: Vec<FieldError>,
    },
}

/// Validate allowlist text. Invalid documents are reported as data, not as an error.
pub fn run_validate_allowlist(text: &str) -> ValidateOutput {
    match auditgate_allowlist::parse_allowlist(Some(text)) {
        Ok(allowlist) => ValidateOutput::Valid {
            entries: allowlist.entries.len(),
            duplicates: allowlist.duplicates,
        },
        Err(err) => invalid(&err),
    }
}

fn invalid(err: &AllowlistError) -> ValidateOutput {
    ValidateOutput::Invalid {
        message: err.to_string(),
        errors: err.field_errors(),
    }
}
