//! Property tests for allowlist parsing.

use auditgate_allowlist::{AllowlistError, parse_allowlist};
use proptest::prelude::*;
use serde_json::json;

fn arb_date() -> impl Strategy<Value = String> {
    (2000i32..2100, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| format!("{y:04}-{m:02}-{d:02}"))
}

fn arb_entry() -> impl Strategy<Value = serde_json::Value> {
    (
        "[0-9]{1,6}|GHSA-[a-z0-9]{4}-[a-z0-9]{4}-[a-z0-9]{4}",
        "[a-z][a-z0-9_.-]{0,20}",
        "[a-zA-Z ]{1,40}",
        prop::option::of(arb_date()),
    )
        .prop_filter("reason must not be blank", |(_, _, reason, _)| {
            !reason.trim().is_empty()
        })
        .prop_map(|(id, package, reason, expires)| {
            let mut entry = json!({ "id": id, "package": package, "reason": reason });
            if let Some(expires) = expires {
                entry["expires"] = json!(expires);
            }
            entry
        })
}

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let _ = parse_allowlist(Some(&text));
    }

    #[test]
    fn well_formed_documents_keep_every_entry_in_order(
        entries in prop::collection::vec(arb_entry(), 0..12)
    ) {
        let text = serde_json::to_string(&entries).unwrap();
        let allowlist = parse_allowlist(Some(&text)).unwrap();

        prop_assert_eq!(allowlist.entries.len(), entries.len());
        for (parsed, raw) in allowlist.entries.iter().zip(&entries) {
            prop_assert_eq!(&parsed.id, raw["id"].as_str().unwrap());
            prop_assert_eq!(&parsed.package, raw["package"].as_str().unwrap());
            prop_assert_eq!(parsed.expires.is_some(), raw.get("expires").is_some());
        }
    }

    #[test]
    fn any_unknown_field_fails_validation(
        entry in arb_entry(),
        extra in "[a-z]{3,12}"
    ) {
        prop_assume!(!["id", "package", "reason", "notes", "expires"].contains(&extra.as_str()));
        let mut entry = entry;
        entry[extra.as_str()] = json!(true);
        let text = serde_json::to_string(&vec![entry]).unwrap();

        let err = parse_allowlist(Some(&text)).unwrap_err();
        let is_schema_error = matches!(err, AllowlistError::Schema { .. });
        prop_assert!(is_schema_error);
        let path = format!("$[0].{extra}");
        prop_assert!(err.field_errors().iter().any(|e| e.field_path == path));
    }
}
