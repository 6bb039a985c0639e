//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod hw_init;
pub mod magnet;
pub mod status_led;
pub mod watchdog;
