//! Bang-bang correction policy.
//!
//! The pendulum bob is mechanically adjusted to run slightly slow
//! (~2 s/h); the electromagnet at BDC speeds the clock up (~8 s/h) while
//! energized.  The wall-clock seconds field is the error signal: if the
//! batch boundary lands past the threshold second, the clock is behind
//! and the magnet is energized for the next batch.
//!
//! Deliberately memoryless — no hysteresis, no integration.  The
//! mechanical inertia of the pendulum keeps drift within ~1 second
//! without oscillation, so each batch is decided independently.

/// Binary actuator decision for the next batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionDecision {
    /// Turn the electromagnet on (speed the clock up).
    Energize,
    /// Turn the electromagnet off (let the clock run slow).
    Deenergize,
}

impl CorrectionDecision {
    pub fn is_energized(self) -> bool {
        matches!(self, Self::Energize)
    }
}

/// Pure decision function: `second > threshold` energizes; equality or
/// below de-energizes.
pub fn decide(second: u8, threshold_seconds: u8) -> CorrectionDecision {
    if second > threshold_seconds {
        CorrectionDecision::Energize
    } else {
        CorrectionDecision::Deenergize
    }
}
