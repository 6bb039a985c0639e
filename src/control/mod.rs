//! Pure control logic — edge detection, batch accumulation, and the
//! bang-bang correction policy.  No I/O; everything here is exercised
//! by host-side unit tests.

pub mod batch;
pub mod edge;
pub mod policy;
