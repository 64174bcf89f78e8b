//! One-shot transmission of a hex payload over a serial port.
//!
//! This is the whole program: validate the payload text, open the port,
//! write the bytes, optionally linger, release the port. Nothing is ever
//! read back; the payload is whatever bytes the operator chose to inject
//! into the device under test.

use std::time::Duration;

use tokio::time;

use crate::error::Result;
use crate::payload::HexPayload;
use crate::tracing::prelude::*;
use crate::transport::Transport;

/// Send `hex_text` as raw bytes to `port` at `baud`, waiting `delay` after
/// the write before releasing the port.
///
/// Validation happens before any I/O: a malformed payload returns
/// `Error::InvalidInput` without the port ever being opened. Once opened,
/// the connection is released on every exit path, including a failed write.
pub async fn send(
    transport: &dyn Transport,
    port: &str,
    baud: u32,
    hex_text: &str,
    delay: Duration,
) -> Result<()> {
    let payload: HexPayload = hex_text.parse()?;

    let mut conn = transport.open(port, baud).await?;
    info!(port = %port, baud = baud, "Opened serial port.");

    let result = async {
        conn.write_all(payload.as_bytes()).await?;
        info!(data = %payload, bytes = payload.len(), "Sent payload.");

        if !delay.is_zero() {
            time::sleep(delay).await;
        }
        Ok(())
    }
    .await;

    // Release the port whether or not the write faulted, but report the
    // write fault first.
    let closed = conn.close().await;
    result.and(closed)
}
