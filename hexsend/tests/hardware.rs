//! Hardware smoke tests.
//!
//! These require a real serial device and are ignored by default. Point
//! HEXSEND_TEST_PORT at a port that is safe to write to, then run:
//! `cargo test -- --ignored`

use std::time::Duration;

use serial_test::serial;

use hexsend::sender;
use hexsend::transport::SerialTransport;

fn test_port() -> String {
    std::env::var("HEXSEND_TEST_PORT").expect("HEXSEND_TEST_PORT not set")
}

#[tokio::test]
#[serial]
#[ignore = "requires serial hardware"]
async fn sends_probe_payload() {
    sender::send(
        &SerialTransport,
        &test_port(),
        9600,
        "01 15 12 DE AD BE EF",
        Duration::ZERO,
    )
    .await
    .expect("send failed");
}

// No hardware needed: a nonexistent port must fail to open on any host.
#[tokio::test]
#[serial]
async fn missing_port_fails_to_open() {
    let err = sender::send(
        &SerialTransport,
        "/dev/ttyHEXSEND_NOSUCH",
        9600,
        "01",
        Duration::ZERO,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, hexsend::error::Error::Connection(_)));
}
