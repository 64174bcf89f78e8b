//! One-shot hex payload transmitter for serial devices.
//!
//! Turns operator-supplied text like `"01 15 12 DE AD BE EF"` into raw
//! bytes, writes them to a named serial port, optionally lingers, and
//! releases the port. Fire-and-forget: nothing is ever read back.

pub mod config;
pub mod error;
pub mod payload;
pub mod sender;
pub mod tracing;
pub mod transport;
