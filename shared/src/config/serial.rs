//! Serial port configuration for the GSM modem

use serde::{Deserialize, Serialize};

/// Serial port configuration
///
/// Describes the single physical serial device the modem transport drives.
/// Loaded once at startup; the transport holds it read-only for the life of
/// the process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SerialConfig {
    /// Serial device path (e.g. `/dev/ttyUSB0`, `COM14`)
    pub port_name: String,

    /// Baud rate for the serial link
    pub baud_rate: u32,

    /// Settle delay in milliseconds after each AT command, giving the modem
    /// time to process it before the next command is issued
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Read timeout in milliseconds for the modem response, bounding the wait
    /// on a non-responsive modem
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: String::from("/dev/ttyUSB0"),
            baud_rate: 115_200,
            settle_delay_ms: default_settle_delay_ms(),
            read_timeout_ms: default_read_timeout_ms(),
        }
    }
}

impl SerialConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let port_name =
            std::env::var("SERIAL_PORT").unwrap_or_else(|_| "/dev/ttyUSB0".to_string());
        let baud_rate = std::env::var("SERIAL_BAUD")
            .unwrap_or_else(|_| "115200".to_string())
            .parse()
            .unwrap_or(115_200);
        let settle_delay_ms = std::env::var("SERIAL_SETTLE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_settle_delay_ms);
        let read_timeout_ms = std::env::var("SERIAL_READ_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_read_timeout_ms);

        Self {
            port_name,
            baud_rate,
            settle_delay_ms,
            read_timeout_ms,
        }
    }
}

fn default_settle_delay_ms() -> u64 {
    500
}

fn default_read_timeout_ms() -> u64 {
    2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_config_default() {
        let config = SerialConfig::default();
        assert_eq!(config.baud_rate, 115_200);
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.read_timeout_ms, 2000);
    }
}
