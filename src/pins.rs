//! GPIO pin assignments for the clock regulator board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Pendulum sensor (IR break-beam at bottom dead center)
// ---------------------------------------------------------------------------

/// Digital input with pull-up.  HIGH = nothing detected; LOW = the pendulum
/// rod is passing BDC.  Polarity is configurable in `RegulatorConfig`, this
/// constant only names the pin.
pub const PENDULUM_SENSOR_GPIO: i32 = 4;

// ---------------------------------------------------------------------------
// Electromagnet (speed-up coil at BDC, driven through a MOSFET)
// ---------------------------------------------------------------------------

/// Digital output: HIGH = coil energized.  With the coil energized the
/// clock gains ~8 s/h; de-energized it loses ~2 s/h.
pub const MAGNET_GPIO: i32 = 3;

// ---------------------------------------------------------------------------
// Status LED (mirrors the sensor: lit while the bob is detected)
// ---------------------------------------------------------------------------

pub const STATUS_LED_GPIO: i32 = 2;
