//! Fuzz target: edge detector → tick accumulator chain
//!
//! Drives arbitrary sensor-level sequences through the detector and the
//! accumulator and asserts the structural invariants: edges strictly
//! alternate, and the pending tick count never reaches the batch size.
//!
//! cargo fuzz run fuzz_edge_chain
//!
//! cargo-fuzz note: the first input byte picks the batch size so small
//! batches get exercised too.

#![no_main]

use clockreg::control::batch::{BatchStatus, TickAccumulator};
use clockreg::control::edge::{EdgeDetector, SensorEdge};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&first, levels)) = data.split_first() else {
        return;
    };
    let batch_size = u32::from(first).max(1);

    let mut edge = EdgeDetector::new(false, true);
    let mut acc = TickAccumulator::new(batch_size);
    let mut last_edge: Option<SensorEdge> = None;

    for &byte in levels {
        if let Some(e) = edge.poll(byte & 1 != 0) {
            assert_ne!(last_edge, Some(e), "consecutive identical edges");
            last_edge = Some(e);
            if e == SensorEdge::Leading {
                let _ = acc.record_leading_edge();
            }
        }
        assert!(acc.count() < batch_size, "count reached batch_size");
    }

    // Resync must clear any half-seen edge without panicking.
    edge.resync(true);
    assert_eq!(edge.poll(true), None);
    let _: BatchStatus = acc.record_leading_edge();
});
