//! AT-command session for one SMS send
//!
//! A session is a strict linear pipeline over an already-open link. Every
//! command is followed by a settle delay: issuing the next command before
//! the modem has processed the previous one is the dominant failure mode for
//! AT-command modems, so the pacing is part of the protocol contract, not an
//! optimization target. Any stage failure aborts the remaining stages; retry
//! is a whole-operation concern of the caller.

use std::io;
use std::time::Duration;

use otp_core::errors::TransportError;

use super::link::ModemLink;

/// ASCII SUB, terminates the message payload in text mode
const CTRL_Z: u8 = 0x1A;

/// Drive the AT-command handshake for one SMS over an open link
pub fn send_text_message(
    link: &mut dyn ModemLink,
    phone: &str,
    message: &str,
    settle_delay: Duration,
) -> Result<(), TransportError> {
    // Init: verify the modem answers at all
    write_command(link, b"AT\r", settle_delay)
        .map_err(|e| TransportError::ModemInitFailed(e.to_string()))?;

    // Mode: select text-mode SMS
    write_command(link, b"AT+CMGF=1\r", settle_delay)
        .map_err(|e| TransportError::ModeSetFailed(e.to_string()))?;

    // Address: declare the recipient
    let address = format!("AT+CMGS=\"{}\"\r", phone);
    write_command(link, address.as_bytes(), settle_delay)
        .map_err(|e| TransportError::AddressFailed(e.to_string()))?;

    // Payload: message body terminated by Ctrl-Z
    let mut payload = message.as_bytes().to_vec();
    payload.push(CTRL_Z);
    write_command(link, &payload, settle_delay)
        .map_err(|e| TransportError::SendFailed(e.to_string()))?;

    // Confirm: the modem acknowledges with a "+CMGS: <ref>" line
    let response = link
        .read_response()
        .map_err(|e| TransportError::DeliveryUnconfirmed(e.to_string()))?;

    if is_send_confirmed(&response) {
        Ok(())
    } else {
        Err(TransportError::DeliveryUnconfirmed(format!(
            "unexpected modem response: {:?}",
            response.trim()
        )))
    }
}

/// Write one command and give the modem its settle delay
fn write_command(link: &mut dyn ModemLink, data: &[u8], settle_delay: Duration) -> io::Result<()> {
    link.write_all(data)?;
    if !settle_delay.is_zero() {
        std::thread::sleep(settle_delay);
    }
    Ok(())
}

/// Check a modem response for the `+CMGS:` success token
///
/// Modems interleave CR/LF noise freely, so line terminators are normalized
/// to spaces before searching. An empty response never confirms anything.
pub fn is_send_confirmed(response: &str) -> bool {
    let normalized = response.replace(['\r', '\n'], " ");
    normalized.contains("+CMGS:")
}
