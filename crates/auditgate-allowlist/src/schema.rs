//! Declarative description of an allowlist entry.
//!
//! The validator interprets this table; adding a field means adding a row here and mapping it
//! in `validate::entry_from_fields`.

/// Value shape accepted for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-empty string. Non-negative integers are accepted and stored as their decimal string,
    /// since scanners emit numeric advisory ids.
    Identifier,
    /// Non-empty (after trimming) string.
    NonEmptyString,
    /// Any string, including empty.
    Text,
    /// Calendar date: `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date.
    Date,
}

impl FieldKind {
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Identifier => "a non-empty string or non-negative integer",
            FieldKind::NonEmptyString => "a non-empty string",
            FieldKind::Text => "a string",
            FieldKind::Date => "a calendar date (YYYY-MM-DD)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Closed schema for one allowlist entry. Keys outside this table are rejected.
pub const ENTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("id", FieldKind::Identifier),
    FieldSpec::required("package", FieldKind::NonEmptyString),
    FieldSpec::required("reason", FieldKind::NonEmptyString),
    FieldSpec::optional("notes", FieldKind::Text),
    FieldSpec::optional("expires", FieldKind::Date),
    FieldSpec::optional("reviewedOn", FieldKind::Date),
];

pub(crate) fn field_names() -> String {
    ENTRY_FIELDS
        .iter()
        .map(|f| f.name)
        .collect::<Vec<_>>()
        .join(", ")
}
