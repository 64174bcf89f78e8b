use anyhow::Result;
use clap::Parser;

use hexsend::config::Config;
use hexsend::sender;
use hexsend::tracing::{self, prelude::*};
use hexsend::transport::SerialTransport;

#[tokio::main]
async fn main() -> Result<()> {
    tracing::init();
    let config = Config::parse();

    sender::send(
        &SerialTransport,
        &config.port,
        config.baud,
        &config.data,
        config.delay,
    )
    .await?;

    info!("Done.");
    Ok(())
}
