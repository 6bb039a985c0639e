//! Fuzz target: configuration decode + validation
//!
//! Feeds arbitrary bytes to the postcard decoder for `RegulatorConfig`
//! and asserts that neither decoding nor validation panics, and that any
//! config that survives both has in-range fields.
//!
//! cargo fuzz run fuzz_config_decode

#![no_main]

use clockreg::config::RegulatorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(config) = postcard::from_bytes::<RegulatorConfig>(data) else {
        return;
    };
    if config.validate().is_ok() {
        assert!(config.batch_size > 0);
        assert!(config.threshold_seconds <= 59);
        assert!((1..=100).contains(&config.poll_interval_ms));
    }
});
