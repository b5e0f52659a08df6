//! Raw modem wiring
//!
//! [`ModemLink`] is the seam between the AT-command session logic and the
//! physical serial port, so the session can be exercised against a scripted
//! fake in tests. [`SerialLink`] is the real thing.

use std::io::{self, Read, Write};
use std::time::Duration;

use serialport::SerialPort;
use tracing::debug;

use otp_core::errors::TransportError;
use otp_shared::config::SerialConfig;

/// Byte-level access to the modem
pub trait ModemLink: Send {
    /// Write a complete command (or payload) to the modem
    fn write_all(&mut self, data: &[u8]) -> io::Result<()>;

    /// Read one response chunk from the modem
    ///
    /// Blocks up to the link's read timeout; a timeout or an empty read is
    /// an error at the session level.
    fn read_response(&mut self) -> io::Result<String>;
}

/// A serial connection to the GSM modem
///
/// Opening acquires exclusive access to the device; dropping the link closes
/// the port. One send operation owns exactly one `SerialLink`.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
}

impl SerialLink {
    /// Open the configured serial port and prepare it for the AT handshake
    pub fn open(config: &SerialConfig) -> Result<Self, TransportError> {
        debug!(
            "Opening serial port {} at {} baud",
            config.port_name, config.baud_rate
        );

        let mut builder = serialport::new(&config.port_name, config.baud_rate)
            .timeout(Duration::from_millis(config.read_timeout_ms));
        // Some USB serial adapters need explicit settings
        #[cfg(unix)]
        {
            builder = builder
                .data_bits(serialport::DataBits::Eight)
                .stop_bits(serialport::StopBits::One)
                .parity(serialport::Parity::None);
        }

        let mut port = builder.open().map_err(|e| {
            TransportError::PortUnavailable(format!("{}: {}", config.port_name, e))
        })?;

        // Toggle DTR/RTS to wake the modem
        let _ = port.write_data_terminal_ready(true);
        let _ = port.write_request_to_send(true);
        std::thread::sleep(Duration::from_millis(150));

        // Purge any buffered startup text so it cannot pollute stage responses
        let mut purge_buf = [0u8; 512];
        if let Ok(available) = port.bytes_to_read() {
            if available > 0 {
                let _ = port.read(&mut purge_buf);
            }
        }

        debug!("Serial port {} opened", config.port_name);

        Ok(Self { port })
    }
}

impl ModemLink for SerialLink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.port.write_all(data)?;
        self.port.flush()
    }

    fn read_response(&mut self) -> io::Result<String> {
        let mut buf = [0u8; 256];
        let n = self.port.read(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf[..n]).into_owned())
    }
}
