//! Regulator service — the hexagonal core.
//!
//! [`RegulatorService`] owns the edge detector, the tick accumulator, and
//! the last applied correction.  It exposes a clean, hardware-agnostic
//! API.  All I/O flows through port traits injected at call sites, making
//! the whole service testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!                 │     RegulatorService        │
//!   ClockPort ──▶ │  Edge · Batch · Bang-bang   │
//! ActuatorPort ◀──└────────────────────────────┘
//! ```
//!
//! One `poll()` call is one control-loop cycle: everything in it runs
//! synchronously; nothing in the hot path blocks on the log/history
//! boundary.

use log::{debug, error, info, warn};

use crate::config::RegulatorConfig;
use crate::control::batch::{BatchStatus, TickAccumulator};
use crate::control::edge::{EdgeDetector, SensorEdge};
use crate::control::policy::{self, CorrectionDecision};
use crate::error::{Error, Result};

use super::events::{AppEvent, BatchRecord};
use super::ports::{ActuatorPort, ClockPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// RegulatorService
// ───────────────────────────────────────────────────────────────

/// Orchestrates the sensor → edge → batch → clock → policy → magnet chain.
pub struct RegulatorService {
    edge: EdgeDetector,
    acc: TickAccumulator,
    threshold_seconds: u8,
    /// Raw pin level meaning "pendulum detected" (wiring-dependent).
    detect_level: bool,
    /// Last decision actually applied to the magnet.  Persists unchanged
    /// between batches and across skipped corrections.
    last_decision: CorrectionDecision,
    // Diagnostic counters, surfaced through getters.
    poll_count: u64,
    sensor_errors: u64,
    batches_completed: u64,
    corrections_applied: u64,
    corrections_skipped: u64,
}

impl RegulatorService {
    /// Construct the service from configuration.
    ///
    /// Does **not** touch hardware — call [`start`](Self::start) next to
    /// seed the edge state and force the magnet to a known state.
    pub fn new(config: &RegulatorConfig) -> Self {
        let detect_level = config.detect_level_high;
        // Assume the idle level until start() reads the real pin.
        let edge = EdgeDetector::new(detect_level, !detect_level);
        Self {
            edge,
            acc: TickAccumulator::new(config.batch_size),
            threshold_seconds: config.threshold_seconds,
            detect_level,
            last_decision: CorrectionDecision::Deenergize,
            poll_count: 0,
            sensor_errors: 0,
            batches_completed: 0,
            corrections_applied: 0,
            corrections_skipped: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Seed the edge state from an initial sensor read and de-energize
    /// the magnet.  The initial magnet write must succeed — starting with
    /// an unknown coil state would make every later decision unreliable.
    pub fn start(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) -> Result<()> {
        // A failed first read falls back to the idle level; the detector
        // will resync itself on the first clean poll without counting a
        // phantom tick.
        let initial = hw.read_pendulum().unwrap_or(!self.detect_level);
        self.edge.resync(initial);
        self.acc.reset();

        hw.set_magnet(false).map_err(Error::from)?;
        self.last_decision = CorrectionDecision::Deenergize;

        sink.emit(&AppEvent::Started);
        info!(
            "Regulator started (initial sensor level {}, magnet off)",
            if initial { "HIGH" } else { "LOW" }
        );
        Ok(())
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// Run one poll cycle: read sensor → classify edge → count → on batch
    /// boundary, sample clock → decide → drive magnet → emit record.
    pub fn poll(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.poll_count += 1;

        let raw = match hw.read_pendulum() {
            Ok(level) => level,
            Err(e) => {
                // Transient: skip this poll, keep edge state, try again
                // on the next one.
                self.sensor_errors += 1;
                debug!("sensor read failed ({e}); poll skipped");
                return;
            }
        };

        match self.edge.poll(raw) {
            Some(SensorEdge::Leading) => {
                hw.set_detect_led(true);
                if self.acc.record_leading_edge() == BatchStatus::BatchComplete {
                    self.complete_batch(hw, clock, sink);
                }
            }
            Some(SensorEdge::Trailing) => hw.set_detect_led(false),
            None => {}
        }
    }

    /// Batch boundary: exactly one clock read, one decision, one magnet
    /// command.  The accumulator has already reset by the time this runs.
    fn complete_batch(
        &mut self,
        hw: &mut impl ActuatorPort,
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) {
        self.batches_completed += 1;

        let sample = match clock.now() {
            Ok(s) => s,
            Err(e) => {
                // Skip this batch's correction entirely; the magnet keeps
                // its previous state and the count restarts from zero.
                self.corrections_skipped += 1;
                warn!(
                    "clock read failed ({e}); correction skipped, magnet stays {:?}",
                    self.last_decision
                );
                sink.emit(&AppEvent::CorrectionSkipped(e));
                return;
            }
        };

        let decision = policy::decide(sample.second, self.threshold_seconds);

        match hw.set_magnet(decision.is_energized()) {
            Ok(()) => {
                self.last_decision = decision;
                self.corrections_applied += 1;
                sink.emit(&AppEvent::BatchCompleted(BatchRecord {
                    batch_index: self.batches_completed,
                    sampled_at: sample,
                    decision,
                }));
            }
            Err(e) => {
                // The decision was computed but never reached the coil.
                // Surface it loudly and keep polling — regulation resumes
                // at the next batch boundary.
                error!("magnet write failed ({e}); decision {decision:?} not applied");
                sink.emit(&AppEvent::ActuatorFault(e));
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Ticks counted toward the current batch, always `< batch_size`.
    pub fn tick_count(&self) -> u32 {
        self.acc.count()
    }

    /// Last decision actually applied to the magnet.
    pub fn last_decision(&self) -> CorrectionDecision {
        self.last_decision
    }

    /// Total poll cycles executed since startup.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }

    /// Polls skipped due to sensor read failures.
    pub fn sensor_errors(&self) -> u64 {
        self.sensor_errors
    }

    /// Batches completed (including ones whose correction was skipped).
    pub fn batches_completed(&self) -> u64 {
        self.batches_completed
    }

    /// Corrections actually applied to the magnet.
    pub fn corrections_applied(&self) -> u64 {
        self.corrections_applied
    }

    /// Batch boundaries where the clock was unreadable.
    pub fn corrections_skipped(&self) -> u64 {
        self.corrections_skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_service_starts_clean() {
        let s = RegulatorService::new(&RegulatorConfig::default());
        assert_eq!(s.last_decision(), CorrectionDecision::Deenergize);
        assert_eq!(s.tick_count(), 0);
        assert_eq!(s.poll_count(), 0);
        assert_eq!(s.batches_completed(), 0);
    }
}
