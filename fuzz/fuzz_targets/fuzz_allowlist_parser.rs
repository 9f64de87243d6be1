//! Fuzz target for allowlist parsing and validation.
//!
//! The parser may reject any input, but it must never panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_allowlist_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = auditgate_allowlist::parse_allowlist(Some(text));
    }
});
