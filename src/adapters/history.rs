//! Shared batch-record history.
//!
//! The control loop is the producer; an external collaborator (file
//! logger, webserver) is the consumer.  The two sides meet at a
//! mutex-guarded fixed-capacity deque with one hard rule: **the control
//! loop never blocks here**.  The producer uses `try_lock` and drops the
//! record if the consumer happens to hold the lock — losing one history
//! line is acceptable, stalling the 1 ms poll cadence is not.
//!
//! Capacity matches the deployed logger's 50-line window; when full, the
//! oldest record is evicted.

use std::sync::Mutex;

use heapless::Deque;

use crate::app::events::{AppEvent, BatchRecord};
use crate::app::ports::EventSink;

/// Maximum number of retained batch records.
pub const HISTORY_CAPACITY: usize = 50;

/// Bounded, never-blocking history of recent batch outcomes.
pub struct BatchHistory {
    inner: Mutex<Deque<BatchRecord, HISTORY_CAPACITY>>,
    // Kept outside the deque so it survives eviction.
    dropped: Mutex<u64>,
}

impl BatchHistory {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Deque::new()),
            dropped: Mutex::new(0),
        }
    }

    /// Producer side.  Returns `false` if the record was dropped because
    /// the consumer held the lock.
    pub fn push(&self, record: BatchRecord) -> bool {
        let Ok(mut q) = self.inner.try_lock() else {
            if let Ok(mut d) = self.dropped.try_lock() {
                *d += 1;
            }
            return false;
        };
        if q.is_full() {
            q.pop_front();
        }
        // Cannot fail: we just made room.
        let _ = q.push_back(record);
        true
    }

    /// Consumer side: copy out the current window, oldest first.  A
    /// blocking lock is fine here — only the consumer ever waits.
    pub fn snapshot(&self) -> Vec<BatchRecord> {
        match self.inner.lock() {
            Ok(q) => q.iter().copied().collect(),
            Err(poisoned) => poisoned.into_inner().iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self.inner.lock() {
            Ok(q) => q.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records lost to producer-side lock contention.
    pub fn dropped(&self) -> u64 {
        match self.dropped.lock() {
            Ok(d) => *d,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Default for BatchHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for &BatchHistory {
    fn emit(&mut self, event: &AppEvent) {
        if let AppEvent::BatchCompleted(rec) = event {
            let _ = self.push(*rec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ports::WallClockSample;
    use crate::control::policy::CorrectionDecision;

    fn record(i: u64) -> BatchRecord {
        BatchRecord {
            batch_index: i,
            sampled_at: WallClockSample::new(12, 0, (i % 60) as u8).unwrap(),
            decision: CorrectionDecision::Deenergize,
        }
    }

    #[test]
    fn retains_most_recent_records() {
        let hist = BatchHistory::new();
        for i in 0..(HISTORY_CAPACITY as u64 + 10) {
            assert!(hist.push(record(i)));
        }
        let snap = hist.snapshot();
        assert_eq!(snap.len(), HISTORY_CAPACITY);
        assert_eq!(snap.first().unwrap().batch_index, 10);
        assert_eq!(
            snap.last().unwrap().batch_index,
            HISTORY_CAPACITY as u64 + 9
        );
    }

    #[test]
    fn sink_only_records_completed_batches() {
        let hist = BatchHistory::new();
        let mut sink = &hist;
        sink.emit(&AppEvent::Started);
        sink.emit(&AppEvent::BatchCompleted(record(1)));
        sink.emit(&AppEvent::CorrectionSkipped(
            crate::error::ClockError::ReadFailed,
        ));
        assert_eq!(hist.len(), 1);
    }

    #[test]
    fn producer_drops_while_consumer_holds_lock() {
        let hist = BatchHistory::new();
        let guard = hist.inner.lock().unwrap();
        assert!(!hist.push(record(1)), "push must not block");
        drop(guard);
        assert_eq!(hist.dropped(), 1);
        assert!(hist.is_empty());
    }
}
