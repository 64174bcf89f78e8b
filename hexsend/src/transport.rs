//! Serial transport capability.
//!
//! The send path only needs three things from a serial port: open it, write
//! bytes to it, close it. This module puts a trait at that seam so the send
//! logic can run against a recording fake in tests instead of real hardware,
//! with the production implementation backed by tokio-serial.

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use crate::error::Result;

/// Read timeout applied to every opened port. This program never reads, but
/// the underlying port is still configured with one.
pub const READ_TIMEOUT: Duration = Duration::from_secs(1);

/// Something that can open a named serial port at a baud rate.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Open `port` at `baud` with the fixed read timeout.
    async fn open(&self, port: &str, baud: u32) -> Result<Box<dyn Connection>>;
}

/// An opened serial connection, exclusively owned by its caller.
#[async_trait]
pub trait Connection: Send {
    /// Write all of `data` to the port and flush it out.
    async fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Release the port.
    async fn close(&mut self) -> Result<()>;
}

/// Production transport backed by tokio-serial.
pub struct SerialTransport;

#[async_trait]
impl Transport for SerialTransport {
    async fn open(&self, port: &str, baud: u32) -> Result<Box<dyn Connection>> {
        let stream = tokio_serial::new(port, baud)
            .timeout(READ_TIMEOUT)
            .open_native_async()?;
        Ok(Box::new(SerialConnection { stream }))
    }
}

struct SerialConnection {
    stream: SerialStream,
}

#[async_trait]
impl Connection for SerialConnection {
    async fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.stream.write_all(data).await?;
        self.stream.flush().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        // Flushed on write; the fd itself is released when the stream drops.
        Ok(())
    }
}
