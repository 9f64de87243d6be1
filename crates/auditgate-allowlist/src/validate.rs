use crate::error::{AllowlistError, FieldError};
use crate::schema::{ENTRY_FIELDS, FieldKind, FieldSpec, field_names};
use auditgate_types::dates::parse_date;
use auditgate_types::{AdvisoryKey, AllowlistEntry};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, UtcOffset};

/// Validated allowlist, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Allowlist {
    pub entries: Vec<AllowlistEntry>,
    /// Later entries that repeat an earlier `(id, package)` key. They are kept, but only the
    /// first occurrence can ever match.
    pub duplicates: Vec<DuplicateKey>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: AdvisoryKey,
    pub first_index: usize,
    pub duplicate_index: usize,
}

impl Allowlist {
    pub fn new(entries: Vec<AllowlistEntry>) -> Self {
        let duplicates = find_duplicates(&entries);
        Self {
            entries,
            duplicates,
        }
    }
}

#[derive(Clone, Debug)]
enum FieldValue {
    Str(String),
    Date(Date),
}

/// Validate an already-parsed JSON document against the entry schema.
///
/// All violations are collected; the result is either every entry or every error.
pub fn validate_document(value: &Value) -> Result<Allowlist, AllowlistError> {
    let Some(items) = value.as_array() else {
        return Err(AllowlistError::NotAnArray {
            found: json_type(value),
        });
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (idx, item) in items.iter().enumerate() {
        let path = format!("$[{idx}]");
        let Some(obj) = item.as_object() else {
            errors.push(FieldError::new(
                path,
                format!("expected an object, got {}", json_type(item)),
            ));
            continue;
        };

        match validate_entry(&path, obj) {
            Ok(entry) => entries.push(entry),
            Err(mut errs) => errors.append(&mut errs),
        }
    }

    if !errors.is_empty() {
        return Err(AllowlistError::Schema { errors });
    }

    Ok(Allowlist::new(entries))
}

fn validate_entry(
    path: &str,
    obj: &Map<String, Value>,
) -> Result<AllowlistEntry, Vec<FieldError>> {
    let mut fields: BTreeMap<&'static str, FieldValue> = BTreeMap::new();
    let mut errors = Vec::new();

    for spec in ENTRY_FIELDS {
        let field_path = format!("{path}.{}", spec.name);
        match obj.get(spec.name) {
            None | Some(Value::Null) if !spec.required => {}
            None => errors.push(FieldError::new(field_path, "required field is missing")),
            Some(value) => match check_field(spec, value) {
                Ok(v) => {
                    fields.insert(spec.name, v);
                }
                Err(message) => errors.push(FieldError::new(field_path, message)),
            },
        }
    }

    for key in obj.keys() {
        if !ENTRY_FIELDS.iter().any(|f| f.name == key) {
            errors.push(FieldError::new(
                format!("{path}.{key}"),
                format!("unknown field (expected one of: {})", field_names()),
            ));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(entry_from_fields(fields))
}

fn check_field(spec: &FieldSpec, value: &Value) -> Result<FieldValue, String> {
    let mismatch = || {
        format!(
            "expected {}, got {}",
            spec.kind.describe(),
            json_type(value)
        )
    };

    match spec.kind {
        FieldKind::Identifier => match value {
            Value::String(s) if s.trim().is_empty() => Err("must not be empty".to_string()),
            Value::String(s) => Ok(FieldValue::Str(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .map(|n| FieldValue::Str(n.to_string()))
                .ok_or_else(mismatch),
            _ => Err(mismatch()),
        },
        FieldKind::NonEmptyString => match value {
            Value::String(s) if s.trim().is_empty() => Err("must not be empty".to_string()),
            Value::String(s) => Ok(FieldValue::Str(s.clone())),
            _ => Err(mismatch()),
        },
        FieldKind::Text => match value {
            Value::String(s) => Ok(FieldValue::Str(s.clone())),
            _ => Err(mismatch()),
        },
        FieldKind::Date => match value {
            Value::String(s) => parse_calendar_date(s)
                .map(FieldValue::Date)
                .ok_or_else(|| format!("expected {}, got {s:?}", spec.kind.describe())),
            _ => Err(mismatch()),
        },
    }
}

fn parse_calendar_date(s: &str) -> Option<Date> {
    if let Ok(date) = parse_date(s) {
        return Some(date);
    }
    OffsetDateTime::parse(s, &Rfc3339)
        .ok()
        .map(|dt| dt.to_offset(UtcOffset::UTC).date())
}

fn entry_from_fields(mut fields: BTreeMap<&'static str, FieldValue>) -> AllowlistEntry {
    let mut take_str = |name: &str| match fields.remove(name) {
        Some(FieldValue::Str(s)) => Some(s),
        _ => None,
    };
    let id = take_str("id").unwrap_or_default();
    let package = take_str("package").unwrap_or_default();
    let reason = take_str("reason").unwrap_or_default();
    let notes = take_str("notes");

    let mut take_date = |name: &str| match fields.remove(name) {
        Some(FieldValue::Date(d)) => Some(d),
        _ => None,
    };
    let expires = take_date("expires");
    let reviewed_on = take_date("reviewedOn");

    AllowlistEntry {
        id,
        package,
        reason,
        notes,
        expires,
        reviewed_on,
    }
}

fn find_duplicates(entries: &[AllowlistEntry]) -> Vec<DuplicateKey> {
    let mut first_seen: BTreeMap<AdvisoryKey, usize> = BTreeMap::new();
    let mut out = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let key = entry.key();
        match first_seen.get(&key) {
            Some(&first_index) => out.push(DuplicateKey {
                key,
                first_index,
                duplicate_index: idx,
            }),
            None => {
                first_seen.insert(key, idx);
            }
        }
    }
    out
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
