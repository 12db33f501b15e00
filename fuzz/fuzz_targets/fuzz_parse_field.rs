//! Fuzz target: free-text field parsing.
//!
//! Verifies that arbitrary byte sequences fed through the field parser
//! never cause panics. Malformed classifications are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = concord_forms::parse_field(&text);
});
