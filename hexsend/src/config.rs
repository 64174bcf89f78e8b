//! Configuration for hexsend.
//!
//! Everything comes from command-line flags, each with an environment
//! variable fallback. The defaults reproduce the original bench setup, so
//! running the binary with no arguments sends the usual probe payload.

use std::time::Duration;

use clap::Parser;

/// Write a hex payload to a serial port, once.
#[derive(Parser, Debug, Clone)]
#[command(name = "hexsend", version)]
pub struct Config {
    /// Serial port name, e.g. COM24 or /dev/ttyUSB0
    #[arg(short, long, env = "HEXSEND_PORT", default_value = "COM24")]
    pub port: String,

    /// Baud rate in symbols per second
    #[arg(
        short,
        long,
        env = "HEXSEND_BAUD",
        default_value_t = 9600,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub baud: u32,

    /// Hex digit pairs to send, spaces optional
    #[arg(
        short,
        long,
        env = "HEXSEND_DATA",
        default_value = "01 15 12 DE AD BE EF"
    )]
    pub data: String,

    /// Seconds to wait after the write before closing the port
    #[arg(
        long,
        env = "HEXSEND_DELAY",
        default_value = "0",
        value_parser = parse_delay
    )]
    pub delay: Duration,
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err("delay must be a non-negative number of seconds".into());
    }
    Duration::try_from_secs_f64(secs).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bench_setup() {
        let config = Config::parse_from(["hexsend"]);
        assert_eq!(config.port, "COM24");
        assert_eq!(config.baud, 9600);
        assert_eq!(config.data, "01 15 12 DE AD BE EF");
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn parses_fractional_delay() {
        let config = Config::parse_from(["hexsend", "--delay", "0.5"]);
        assert_eq!(config.delay, Duration::from_millis(500));
    }

    #[test]
    fn rejects_negative_delay() {
        assert!(Config::try_parse_from(["hexsend", "--delay=-1"]).is_err());
    }

    #[test]
    fn rejects_zero_baud() {
        assert!(Config::try_parse_from(["hexsend", "--baud", "0"]).is_err());
    }
}
