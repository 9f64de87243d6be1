//! Fuzz target for scanner output parsing (npm v1/v2 JSON, yarn NDJSON, banner-prefixed text).
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_audit_report
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(report) = auditgate_audit::parse_audit_report(text) {
            for (key, advisory) in &report.advisories {
                assert_eq!(key, &advisory.key());
            }
        }
    }
});
