//! Allowlist parsing and validation.
//!
//! This crate is intentionally IO-free: it validates allowlist text supplied by the caller.
//! A missing allowlist (`None`) is an empty allowlist; a malformed one is always an error.

#![forbid(unsafe_code)]

mod error;
mod schema;
mod validate;

pub use error::{AllowlistError, FieldError};
pub use schema::{ENTRY_FIELDS, FieldKind, FieldSpec};
pub use validate::{Allowlist, DuplicateKey, validate_document};

/// Parse allowlist text into validated entries.
///
/// `None` means no allowlist exists and yields an empty allowlist (strict mode).
pub fn parse_allowlist(text: Option<&str>) -> Result<Allowlist, AllowlistError> {
    let Some(text) = text else {
        return Ok(Allowlist::default());
    };

    if text.trim().is_empty() {
        return Err(AllowlistError::Empty);
    }

    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| AllowlistError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        })?;

    validate_document(&value)
}
