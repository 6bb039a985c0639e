//! Clock Regulator Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative poll loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                     │
//! │                                                              │
//! │  HardwareAdapter      SystemClockAdapter    LogEventSink     │
//! │  (Sensor+Actuator)    (ClockPort)           (EventSink)      │
//! │  BatchHistory                                                │
//! │  (EventSink, read by external logger/webserver)              │
//! │                                                              │
//! │  ────────────── Port Trait Boundary ──────────────────       │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────┐      │
//! │  │          RegulatorService (pure logic)             │      │
//! │  │  Edge detector · Tick batch · Bang-bang policy     │      │
//! │  └────────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop polls the pendulum sensor every `poll_interval_ms` (1 ms
//! nominal — well under the ~0.9 s half-period between edges), and the
//! fixed inter-poll sleep is the only suspension point.
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod pins;

pub mod app;
mod adapters;
mod control;
mod drivers;

// ── Imports ───────────────────────────────────────────────────
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use adapters::hardware::HardwareAdapter;
use adapters::history::BatchHistory;
use adapters::log_sink::LogEventSink;
use adapters::time::SystemClockAdapter;
use app::events::AppEvent;
use app::ports::{ClockPort, EventSink};
use app::service::RegulatorService;
use config::RegulatorConfig;
use drivers::magnet::MagnetDriver;
use drivers::status_led::StatusLed;
use drivers::watchdog::PollWatchdog;

// ── Fan-out sink ──────────────────────────────────────────────
//
// Every domain event goes to the serial log; completed batches also land
// in the shared history that the external logger/webserver snapshots.

struct RegulatorSink {
    log: LogEventSink,
    history: Arc<BatchHistory>,
}

impl EventSink for RegulatorSink {
    fn emit(&mut self, event: &AppEvent) {
        self.log.emit(event);
        let mut history: &BatchHistory = &self.history;
        history.emit(event);
    }
}

// ── Start alignment ───────────────────────────────────────────

/// Block until the wall-clock seconds field equals `target_second`, so
/// the first batch starts from zero error.  Gives up after repeated
/// clock failures rather than wedging the boot.
fn wait_for_alignment(clock: &mut impl ClockPort, target_second: u8) {
    const MAX_CLOCK_FAILURES: u32 = 50;

    info!("Waiting for seconds == {target_second} before counting starts");
    let mut failures = 0;
    loop {
        match clock.now() {
            Ok(s) if s.second == target_second => return,
            Ok(_) => {}
            Err(e) => {
                failures += 1;
                if failures >= MAX_CLOCK_FAILURES {
                    warn!("alignment abandoned after {failures} clock failures ({e})");
                    return;
                }
            }
        }
        std::thread::sleep(Duration::from_millis(200));
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ClockReg v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = RegulatorConfig::default();
    config.validate()?;

    // ── 3. Hardware ───────────────────────────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let mut watchdog = PollWatchdog::new(PollWatchdog::timeout_for(config.poll_interval_ms));

    let mut clock = SystemClockAdapter::new();
    let mut hw = HardwareAdapter::new(MagnetDriver::new(), StatusLed::new());

    // The history Arc is what an external logger/webserver task would
    // clone and snapshot(); the regulator core only ever pushes into it.
    let history = Arc::new(BatchHistory::new());
    let mut sink = RegulatorSink {
        log: LogEventSink::new(),
        history: Arc::clone(&history),
    };

    // ── 4. Regulator service ──────────────────────────────────
    let mut service = RegulatorService::new(&config);

    if config.align_start {
        wait_for_alignment(&mut clock, config.threshold_seconds);
    }
    service.start(&mut hw, &mut sink)?;

    info!(
        "Regulator running (batch={}, threshold={}s, poll={}ms)",
        config.batch_size, config.threshold_seconds, config.poll_interval_ms
    );

    // ── 5. Poll loop ──────────────────────────────────────────
    let poll_interval = Duration::from_millis(u64::from(config.poll_interval_ms));
    loop {
        service.poll(&mut hw, &mut clock, &mut sink);
        watchdog.feed();
        std::thread::sleep(poll_interval);
    }
}
