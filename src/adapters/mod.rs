//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements       | Connects to                      |
//! |-------------|------------------|----------------------------------|
//! | `hardware`  | SensorPort       | sensor GPIO                      |
//! |             | ActuatorPort     | magnet + LED GPIO                |
//! | `time`      | ClockPort        | system clock (UTC)               |
//! | `log_sink`  | EventSink        | serial log output                |
//! | `history`   | EventSink        | shared batch-record buffer read  |
//! |             |                  | by the external logger/webserver |

pub mod hardware;
pub mod history;
pub mod log_sink;
pub mod time;
