//! Tick accumulator — counts leading edges modulo the batch size.
//!
//! Every detected pass of the pendulum through BDC is one "tick".  After
//! `batch_size` ticks (66 = one nominal minute of beats) the accumulator
//! signals a completed batch and resets in the same operation, so no
//! caller can ever observe `count == batch_size`.

/// Outcome of recording one leading edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// Edge counted; batch still in progress.
    Counting,
    /// This edge completed the batch; the counter has already reset.
    BatchComplete,
}

/// Counts detected ticks in `[0, batch_size)`.
pub struct TickAccumulator {
    count: u32,
    batch_size: u32,
}

impl TickAccumulator {
    pub fn new(batch_size: u32) -> Self {
        debug_assert!(batch_size > 0, "batch_size must be nonzero");
        Self {
            count: 0,
            batch_size,
        }
    }

    /// Record one leading edge.  Trailing edges must not be fed here —
    /// only the transition *into* the detection window counts a tick.
    pub fn record_leading_edge(&mut self) -> BatchStatus {
        self.count += 1;
        if self.count == self.batch_size {
            self.count = 0;
            BatchStatus::BatchComplete
        } else {
            BatchStatus::Counting
        }
    }

    /// Current tick count, always `< batch_size`.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Reset without completing a batch (used when re-aligning at startup).
    pub fn reset(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_exactly_on_batch_size() {
        let mut acc = TickAccumulator::new(66);
        for i in 1..66 {
            assert_eq!(acc.record_leading_edge(), BatchStatus::Counting);
            assert_eq!(acc.count(), i);
        }
        assert_eq!(acc.record_leading_edge(), BatchStatus::BatchComplete);
        assert_eq!(acc.count(), 0, "reset happens in the same operation");
    }

    #[test]
    fn count_never_reaches_batch_size() {
        let mut acc = TickAccumulator::new(5);
        for _ in 0..1000 {
            acc.record_leading_edge();
            assert!(acc.count() < 5);
        }
    }

    #[test]
    fn consecutive_batches_are_independent() {
        let mut acc = TickAccumulator::new(3);
        let mut completions = 0;
        for _ in 0..12 {
            if acc.record_leading_edge() == BatchStatus::BatchComplete {
                completions += 1;
            }
        }
        assert_eq!(completions, 4);
    }

    #[test]
    fn reset_discards_partial_batch() {
        let mut acc = TickAccumulator::new(66);
        for _ in 0..30 {
            acc.record_leading_edge();
        }
        acc.reset();
        assert_eq!(acc.count(), 0);
    }
}
