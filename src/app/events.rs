//! Outbound application events.
//!
//! The [`RegulatorService`](super::service::RegulatorService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters on
//! the other side decide what to do with them — log to serial, append to
//! the shared batch history, etc.

use crate::control::policy::CorrectionDecision;
use crate::error::{ActuatorError, ClockError};

use super::ports::WallClockSample;

/// Structured events emitted by the regulator core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The service has started; the magnet is known de-energized.
    Started,

    /// A batch completed and its correction was applied.
    BatchCompleted(BatchRecord),

    /// A batch completed but the clock could not be read; the magnet was
    /// left in its previous state.
    CorrectionSkipped(ClockError),

    /// The magnet write failed after a decision was computed.  Operator
    /// attention required — an un-actuated decision breaks regulation.
    ActuatorFault(ActuatorError),
}

/// One line of regulation history: when the batch ended and what was
/// decided.  This is the log record handed to external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRecord {
    /// Monotonic batch counter since startup.
    pub batch_index: u64,
    /// Wall-clock sample taken at the batch boundary.
    pub sampled_at: WallClockSample,
    /// The decision applied for the next batch.
    pub decision: CorrectionDecision,
}
