//! System configuration parameters
//!
//! All tunable parameters for the clock regulator.  Defaults match the
//! reference hardware: a 66 ticks/min pendulum with an IR sensor that
//! reads LOW while the rod is passing BDC.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Core regulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegulatorConfig {
    // --- Batching ---
    /// Number of detected ticks per correction batch.
    /// 66 = one nominal minute of beats; 3960 = one hour.
    pub batch_size: u32,

    // --- Correction policy ---
    /// Seconds-field threshold: `second > threshold` energizes the magnet.
    /// Valid range 0-59.
    pub threshold_seconds: u8,

    // --- Sensor wiring ---
    /// Logic level on the sensor pin while the pendulum is detected at BDC.
    /// `false` for the reference IR sensor (idle HIGH via pull-up, LOW on
    /// detect); `true` for inverted wiring.
    pub detect_level_high: bool,

    // --- Timing ---
    /// Sensor poll interval (milliseconds).  Must stay short relative to
    /// the minimum half-period between pendulum edges (~0.9 s) or edges
    /// will be missed.
    pub poll_interval_ms: u32,

    // --- Startup ---
    /// Wait until the wall-clock seconds field equals `threshold_seconds`
    /// before counting begins, so the first batch starts from zero error.
    pub align_start: bool,
}

impl Default for RegulatorConfig {
    fn default() -> Self {
        Self {
            batch_size: 66,
            threshold_seconds: 30,
            detect_level_high: false,
            poll_interval_ms: 1,
            align_start: true,
        }
    }
}

impl RegulatorConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), Error> {
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be nonzero"));
        }
        if self.threshold_seconds > 59 {
            return Err(Error::Config("threshold_seconds must be 0-59"));
        }
        if self.poll_interval_ms == 0 {
            return Err(Error::Config("poll_interval_ms must be nonzero"));
        }
        // A 66 ticks/min pendulum has a ~0.9 s half-period; anything
        // slower than a few ms per poll risks missing edges outright.
        if self.poll_interval_ms > 100 {
            return Err(Error::Config("poll_interval_ms too coarse to catch edges"));
        }
        Ok(())
    }
}
