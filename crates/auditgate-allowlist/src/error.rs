use std::fmt;

/// A single schema violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    /// Location in the document, e.g. `$[2].expires` (`$` is the root).
    pub field_path: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_path: field_path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// The allowlist could not be used. Always fatal for the run.
#[derive(Debug, thiserror::Error)]
pub enum AllowlistError {
    #[error("allowlist is empty; expected a JSON array (use `[]` for no entries)")]
    Empty,

    #[error("allowlist is not valid JSON: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("allowlist must be a JSON array of entries, found {found}")]
    NotAnArray { found: &'static str },

    #[error("allowlist failed schema validation with {} error(s)", .errors.len())]
    Schema { errors: Vec<FieldError> },
}

impl AllowlistError {
    /// Field-level view of the failure, for uniform reporting.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            AllowlistError::Empty => vec![FieldError::new("$", "document is empty")],
            AllowlistError::Json { message, .. } => {
                vec![FieldError::new("$", format!("invalid JSON: {message}"))]
            }
            AllowlistError::NotAnArray { found } => vec![FieldError::new(
                "$",
                format!("expected an array, got {found}"),
            )],
            AllowlistError::Schema { errors } => errors.clone(),
        }
    }
}
