//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the magnet and LED drivers and reads the sensor pin, exposing
//! them through [`SensorPort`] and [`ActuatorPort`].  This is the only
//! module in the system that touches actual GPIO.  On non-espidf targets,
//! the underlying drivers use cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::magnet::MagnetDriver;
use crate::drivers::status_led::StatusLed;
use crate::error::{ActuatorError, SensorError};
use crate::pins;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    magnet: MagnetDriver,
    led: StatusLed,
}

impl HardwareAdapter {
    pub fn new(magnet: MagnetDriver, led: StatusLed) -> Self {
        Self { magnet, led }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_pendulum(&mut self) -> Result<bool, SensorError> {
        // gpio_get_level on a configured input cannot fail on ESP-IDF;
        // the Result is part of the port contract for other backends.
        Ok(hw_init::gpio_read(pins::PENDULUM_SENSOR_GPIO))
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_magnet(&mut self, energized: bool) -> Result<(), ActuatorError> {
        self.magnet.set(energized)
    }

    fn magnet_energized(&self) -> bool {
        self.magnet.is_energized()
    }

    fn set_detect_led(&mut self, lit: bool) {
        self.led.set(lit);
    }
}
