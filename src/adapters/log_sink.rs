//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured regulator events to the
//! logger (UART / USB-CDC in production).  The batch line format matches
//! the operator's long-standing convention: `h:m:s (UTC) EM_ON|EM_OFF`.

use log::{error, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::control::policy::CorrectionDecision;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::BatchCompleted(rec) => {
                let t = rec.sampled_at;
                info!(
                    "BATCH {:>5} | {}:{:02}:{:02} (UTC) {}",
                    rec.batch_index,
                    t.hour,
                    t.minute,
                    t.second,
                    match rec.decision {
                        CorrectionDecision::Energize => "EM_ON",
                        CorrectionDecision::Deenergize => "EM_OFF",
                    },
                );
            }
            AppEvent::CorrectionSkipped(e) => {
                warn!("BATCH | correction skipped: {e}");
            }
            AppEvent::ActuatorFault(e) => {
                error!("FAULT | magnet write failed: {e}");
            }
            AppEvent::Started => {
                info!("START | magnet de-energized, counting from zero");
            }
        }
    }
}
