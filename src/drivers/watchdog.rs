//! Poll-loop watchdog.
//!
//! Subscribes the regulator's poll task to the ESP-IDF task watchdog so
//! a stalled loop (wedged sensor read, runaway lock wait) resets the
//! device instead of silently letting the clock drift unregulated.
//!
//! The timeout is derived from the configured poll cadence rather than
//! hard-coded: the loop normally feeds every `poll_interval_ms`, so a
//! timeout of many thousand intervals only ever fires on a genuine
//! stall, never on scheduling jitter.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;

/// Missed-feed margin: the loop must stall for this many poll intervals
/// before the device resets.
const TIMEOUT_POLL_INTERVALS: u32 = 10_000;

/// Bounds on the derived timeout.  The floor keeps boot-time logging
/// bursts from tripping it; the ceiling keeps a coarse-polling config
/// from disabling stall protection in practice.
const TIMEOUT_FLOOR_MS: u32 = 5_000;
const TIMEOUT_CEIL_MS: u32 = 30_000;

/// Watchdog for the regulator poll loop.  Feed once per iteration.
pub struct PollWatchdog {
    timeout_ms: u32,
    feeds: u64,
    #[cfg(target_os = "espidf")]
    subscribed: bool,
}

impl PollWatchdog {
    /// Timeout for a given poll cadence: `TIMEOUT_POLL_INTERVALS` missed
    /// polls, clamped to the floor/ceiling.  The nominal 1 ms poll maps
    /// to a 10 s timeout.
    pub fn timeout_for(poll_interval_ms: u32) -> u32 {
        poll_interval_ms
            .saturating_mul(TIMEOUT_POLL_INTERVALS)
            .clamp(TIMEOUT_FLOOR_MS, TIMEOUT_CEIL_MS)
    }

    /// Reconfigure the task watchdog and subscribe the current task.
    /// A failed subscribe is logged and degrades to a no-op watchdog —
    /// regulation still matters more than stall protection.
    pub fn new(timeout_ms: u32) -> Self {
        #[cfg(target_os = "espidf")]
        {
            let subscribed = unsafe {
                let cfg = esp_task_wdt_config_t {
                    timeout_ms,
                    idle_core_mask: 0,
                    trigger_panic: true,
                };
                let ret = esp_task_wdt_reconfigure(&cfg);
                if ret != ESP_OK {
                    log::warn!("poll watchdog: reconfigure returned {ret}");
                }
                esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK
            };
            if subscribed {
                info!("poll watchdog: armed, {timeout_ms} ms stall budget");
            } else {
                log::warn!("poll watchdog: subscribe failed, running unprotected");
            }
            Self {
                timeout_ms,
                feeds: 0,
                subscribed,
            }
        }

        #[cfg(not(target_os = "espidf"))]
        {
            info!("poll watchdog(sim): armed, {timeout_ms} ms stall budget");
            Self {
                timeout_ms,
                feeds: 0,
            }
        }
    }

    /// One feed per poll-loop iteration.
    pub fn feed(&mut self) {
        self.feeds += 1;
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }

    /// Stall budget in milliseconds.
    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    /// Total feeds since arming (diagnostics; tracks the poll count when
    /// the loop is healthy).
    pub fn feeds(&self) -> u64 {
        self.feeds
    }
}
