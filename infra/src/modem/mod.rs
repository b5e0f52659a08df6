//! Serial GSM modem SMS transport
//!
//! Sends one SMS text message by driving the modem through a half-duplex
//! AT-command handshake over a serial link:
//!
//! | Stage   | Command                  |
//! |---------|--------------------------|
//! | Open    | (connect at configured baud) |
//! | Init    | `AT`                     |
//! | Mode    | `AT+CMGF=1`              |
//! | Address | `AT+CMGS="<phone>"`      |
//! | Payload | `<message>` + Ctrl-Z     |
//! | Confirm | read, expect `+CMGS:`    |
//!
//! The sequence is strictly linear; each stage either completes (followed by
//! a settle delay so the modem can digest the command) or aborts the send
//! with a typed per-stage error. The port is a scoped resource: opened at the
//! start of a send and closed on every exit path.

pub mod link;
pub mod session;
pub mod transport;

#[cfg(test)]
mod tests;

pub use link::{ModemLink, SerialLink};
pub use transport::{LinkFactory, SerialLinkFactory, SerialSmsTransport};
