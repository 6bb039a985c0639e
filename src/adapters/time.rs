//! System clock adapter.
//!
//! Implements [`ClockPort`] over the platform wall clock, always UTC:
//!
//! - **`target_os = "espidf"`** — a single `gettimeofday()` syscall (the
//!   RTC is assumed to have been set externally, e.g. at flash time).
//! - **`not(target_os = "espidf")`** — `std::time::SystemTime` for
//!   host-side testing and simulation.
//!
//! An epoch before 2020-01-01 means the clock was never set since
//! power-up and is reported as [`ClockError::NotSynced`] rather than a
//! bogus sample.

use crate::app::ports::{ClockPort, WallClockSample};
use crate::error::ClockError;

/// Reject obviously unsynced time (before 2020-01-01 UTC).
const EPOCH_2020: i64 = 1_577_836_800;

const SECS_PER_DAY: i64 = 86_400;

/// Split an epoch timestamp into a UTC time-of-day sample.
fn sample_from_epoch(epoch_secs: i64) -> Result<WallClockSample, ClockError> {
    if epoch_secs < EPOCH_2020 {
        return Err(ClockError::NotSynced);
    }
    let of_day = epoch_secs.rem_euclid(SECS_PER_DAY);
    WallClockSample::new(
        (of_day / 3600) as u8,
        (of_day % 3600 / 60) as u8,
        (of_day % 60) as u8,
    )
}

/// Wall-clock adapter for the regulator.
pub struct SystemClockAdapter;

impl SystemClockAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClockAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClockAdapter {
    #[cfg(target_os = "espidf")]
    fn now(&mut self) -> Result<WallClockSample, ClockError> {
        use core::ptr;
        let mut tv = esp_idf_svc::sys::timeval {
            tv_sec: 0,
            tv_usec: 0,
        };
        // SAFETY: gettimeofday writes into the local timeval; no aliasing.
        if unsafe { esp_idf_svc::sys::gettimeofday(&mut tv, ptr::null_mut()) } != 0 {
            return Err(ClockError::ReadFailed);
        }
        sample_from_epoch(tv.tv_sec as i64)
    }

    #[cfg(not(target_os = "espidf"))]
    fn now(&mut self) -> Result<WallClockSample, ClockError> {
        let epoch = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|_| ClockError::ReadFailed)?;
        sample_from_epoch(epoch.as_secs() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_splits_into_utc_fields() {
        // 2021-01-01 00:00:30 UTC
        let s = sample_from_epoch(1_609_459_230).unwrap();
        assert_eq!((s.hour, s.minute, s.second), (0, 0, 30));

        // 2021-01-01 23:59:59 UTC
        let s = sample_from_epoch(1_609_459_200 + 23 * 3600 + 59 * 60 + 59).unwrap();
        assert_eq!((s.hour, s.minute, s.second), (23, 59, 59));
    }

    #[test]
    fn pre_2020_epoch_is_not_synced() {
        assert_eq!(sample_from_epoch(0), Err(ClockError::NotSynced));
        assert_eq!(sample_from_epoch(EPOCH_2020 - 1), Err(ClockError::NotSynced));
        assert!(sample_from_epoch(EPOCH_2020).is_ok());
    }

    #[test]
    fn host_clock_produces_valid_sample() {
        let mut clock = SystemClockAdapter::new();
        let s = clock.now().expect("host clock should be synced");
        assert!(s.hour <= 23 && s.minute <= 59 && s.second <= 59);
    }
}
