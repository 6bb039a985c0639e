//! Electromagnet driver (coil at BDC behind a logic-level MOSFET).
//!
//! The coil is a plain binary output but its command path is the whole
//! point of the system, so the driver is deliberately strict about two
//! things: a redundant command never touches the pin (no glitch on the
//! output while the coil holds its state between batches), and every
//! state change is counted for diagnostics.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real magnet GPIO via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::ActuatorError;
use crate::pins;

pub struct MagnetDriver {
    energized: bool,
    /// Number of actual on↔off transitions driven to the pin.
    transitions: u32,
}

impl MagnetDriver {
    /// The coil starts de-energized; hw_init has already driven the pin low.
    pub fn new() -> Self {
        Self {
            energized: false,
            transitions: 0,
        }
    }

    /// Command the coil.  Idempotent: commanding the current state is a
    /// no-op with no hardware write.
    pub fn set(&mut self, energized: bool) -> Result<(), ActuatorError> {
        if energized == self.energized {
            return Ok(());
        }
        hw_init::gpio_write(pins::MAGNET_GPIO, energized);
        self.energized = energized;
        self.transitions += 1;
        Ok(())
    }

    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Total pin transitions since startup (diagnostics).
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

impl Default for MagnetDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_deenergized() {
        let m = MagnetDriver::new();
        assert!(!m.is_energized());
        assert_eq!(m.transitions(), 0);
    }

    #[test]
    fn redundant_command_is_glitch_free() {
        let mut m = MagnetDriver::new();
        m.set(true).unwrap();
        m.set(true).unwrap();
        m.set(true).unwrap();
        assert!(m.is_energized());
        assert_eq!(m.transitions(), 1, "repeated energize must not toggle the pin");
    }

    #[test]
    fn transition_counting() {
        let mut m = MagnetDriver::new();
        m.set(true).unwrap();
        m.set(false).unwrap();
        m.set(false).unwrap();
        m.set(true).unwrap();
        assert_eq!(m.transitions(), 3);
    }
}
