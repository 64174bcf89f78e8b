//! Common error types for hexsend.
//!
//! A single transmit attempt can fail in exactly three places: validating
//! the payload text, opening the port, and writing to it. Each gets its own
//! variant; all are fatal to the invocation.

use thiserror::Error;

/// Main error type for hexsend operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed hex text, detected before any I/O
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The named serial port could not be opened
    #[error("serial connection error: {0}")]
    Connection(#[from] tokio_serial::Error),

    /// A write to an opened port failed
    #[error("serial transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
