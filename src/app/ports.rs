//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ RegulatorService (domain)
//! ```
//!
//! Driven adapters (sensor, clock, magnet, event sinks) implement these
//! traits.  The [`RegulatorService`](super::service::RegulatorService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.  All port errors are typed — callers must handle every
//! variant explicitly; there is no exception-style control flow.

use crate::error::{ActuatorError, ClockError, SensorError};

// ───────────────────────────────────────────────────────────────
// Wall-clock sample
// ───────────────────────────────────────────────────────────────

/// One absolute time-of-day reading, taken exactly once per completed
/// batch and never cached across batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClockSample {
    /// 0-23
    pub hour: u8,
    /// 0-59
    pub minute: u8,
    /// 0-59 — the error signal for the correction policy.
    pub second: u8,
}

impl WallClockSample {
    /// Range-checked constructor.  An implausible field means the clock
    /// source is broken, which must surface as an error, not a sample.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::FieldOutOfRange);
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per poll to obtain the raw
/// pendulum-sensor level.
pub trait SensorPort {
    /// Instantaneous logic level on the sensor pin.  What the level
    /// *means* (detected vs idle) is decided by the edge detector's
    /// configured polarity, not here.
    fn read_pendulum(&mut self) -> Result<bool, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC / system clock → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock read, ideally UTC.  Must not block beyond a register or
/// syscall read; an unavailable clock returns an error, never a stale or
/// default sample.
pub trait ClockPort {
    fn now(&mut self) -> Result<WallClockSample, ClockError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the electromagnet
/// and the detection LED.
pub trait ActuatorPort {
    /// Drive the electromagnet.  Implementations must be idempotent: a
    /// redundant command produces no glitch on the output.
    fn set_magnet(&mut self, energized: bool) -> Result<(), ActuatorError>;

    /// Whether the magnet is currently commanded on.
    fn magnet_energized(&self) -> bool;

    /// Mirror the sensor on the status LED (lit while the bob is at BDC).
    fn set_detect_led(&mut self, lit: bool);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / history)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log, the
/// shared batch history read by an external webserver, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
