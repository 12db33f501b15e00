//! Fuzz target: the engine over arbitrary f64 bit patterns.
//!
//! Verifies that no (mean, variance) pair — NaN, infinities, subnormals
//! included — can panic the derivation. Rejections are expected and fine.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let mut mean_bytes = [0u8; 8];
    let mut variance_bytes = [0u8; 8];
    mean_bytes.copy_from_slice(&data[..8]);
    variance_bytes.copy_from_slice(&data[8..16]);

    let mean = f64::from_le_bytes(mean_bytes);
    let variance = f64::from_le_bytes(variance_bytes);

    let _ = concord_core::evaluate(mean, variance);
});
