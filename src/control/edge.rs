//! Pendulum sensor edge detector.
//!
//! The sensor pin is polled at a fixed short interval (nominally 1 ms).
//! The detector keeps the level seen on the previous poll and reports a
//! transition relative to it:
//!
//! | Transition            | Edge       |
//! |-----------------------|------------|
//! | idle → detect         | `Leading`  |
//! | detect → idle         | `Trailing` |
//! | no change             | (none)     |
//!
//! The only debounce is the inter-poll delay itself.  Two level changes
//! inside one poll interval collapse into at most one observed edge —
//! a known precision limit of the sampling scheme, carried over from the
//! deployed hardware where no contact bounce has been confirmed.
//! TODO: scope the IR sensor output to verify bounce is really absent.

/// A logical transition of the pendulum sensor signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEdge {
    /// The pendulum entered the detection window at BDC.
    Leading,
    /// The pendulum left the detection window.
    Trailing,
}

/// Tracks the previously observed level and classifies transitions.
pub struct EdgeDetector {
    /// Raw pin level that means "pendulum detected".
    detect_level: bool,
    /// Whether the previous poll saw the detect level.
    previously_detected: bool,
}

impl EdgeDetector {
    /// `detect_level` is the raw level meaning "detected" (LOW for the
    /// reference IR sensor).  `initial_level` is the raw level read once
    /// at startup, so the first poll cannot fabricate an edge.
    pub fn new(detect_level: bool, initial_level: bool) -> Self {
        Self {
            detect_level,
            previously_detected: initial_level == detect_level,
        }
    }

    /// Classify one poll.  Updates the stored level exactly once per call.
    pub fn poll(&mut self, raw_level: bool) -> Option<SensorEdge> {
        let detected = raw_level == self.detect_level;
        let edge = match (self.previously_detected, detected) {
            (false, true) => Some(SensorEdge::Leading),
            (true, false) => Some(SensorEdge::Trailing),
            _ => None,
        };
        self.previously_detected = detected;
        edge
    }

    /// Re-seed the stored level from a fresh raw read.  Used at startup
    /// so the first real poll cannot fabricate an edge.
    pub fn resync(&mut self, raw_level: bool) {
        self.previously_detected = raw_level == self.detect_level;
    }

    /// Whether the last poll saw the pendulum at BDC.
    pub fn is_detected(&self) -> bool {
        self.previously_detected
    }
}
