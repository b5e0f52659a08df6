//! Unit tests for the AT-command session
//!
//! Exercised against a scripted link that records every write, can fail at
//! any chosen stage, and tracks whether it was closed (dropped) afterwards,
//! mirroring the per-send port scope of the real transport.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use otp_core::errors::TransportError;

use crate::modem::link::ModemLink;
use crate::modem::session::{is_send_confirmed, send_text_message};

const PHONE: &str = "+14155552671";
const MESSAGE: &str = "Your OTP is: 123456";

/// Scripted stand-in for the serial link
struct ScriptedLink {
    writes: Arc<Mutex<Vec<Vec<u8>>>>,
    /// Zero-based index of the write that should fail, if any
    fail_on_write: Option<usize>,
    /// Response returned by the confirm-stage read
    response: io::Result<String>,
    closed: Arc<AtomicBool>,
}

impl ScriptedLink {
    fn new(response: io::Result<String>) -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
            fail_on_write: None,
            response,
            closed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn failing_at(write_index: usize) -> Self {
        let mut link = Self::new(Ok("+CMGS: 1".to_string()));
        link.fail_on_write = Some(write_index);
        link
    }

    fn writes_handle(&self) -> Arc<Mutex<Vec<Vec<u8>>>> {
        Arc::clone(&self.writes)
    }

    fn closed_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.closed)
    }
}

impl ModemLink for ScriptedLink {
    fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        let mut writes = self.writes.lock().unwrap();
        if self.fail_on_write == Some(writes.len()) {
            return Err(io::Error::new(io::ErrorKind::Other, "wire broke"));
        }
        writes.push(data.to_vec());
        Ok(())
    }

    fn read_response(&mut self) -> io::Result<String> {
        match &self.response {
            Ok(s) => Ok(s.clone()),
            Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
        }
    }
}

impl Drop for ScriptedLink {
    fn drop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

/// Run one send inside the same scope the transport uses: the link is
/// dropped (port closed) when the send completes or fails.
fn run_send(link: ScriptedLink) -> Result<(), TransportError> {
    let mut link = link;
    send_text_message(&mut link, PHONE, MESSAGE, Duration::ZERO)
}

#[test]
fn test_successful_send_issues_exact_command_sequence() {
    let link = ScriptedLink::new(Ok("\r\nOK\r\n+CMGS: 12\r\n".to_string()));
    let writes = link.writes_handle();
    let closed = link.closed_handle();

    run_send(link).unwrap();

    let writes = writes.lock().unwrap();
    let expected: Vec<Vec<u8>> = vec![
        b"AT\r".to_vec(),
        b"AT+CMGF=1\r".to_vec(),
        format!("AT+CMGS=\"{}\"\r", PHONE).into_bytes(),
        format!("{}\x1A", MESSAGE).into_bytes(),
    ];
    assert_eq!(*writes, expected);
    assert!(closed.load(Ordering::SeqCst), "port left open after send");
}

#[test]
fn test_failure_at_each_stage_stops_the_pipeline() {
    // (failing write index, expected stage name)
    let cases = [
        (0usize, "init"),
        (1, "mode"),
        (2, "address"),
        (3, "payload"),
    ];

    for (index, stage) in cases {
        let link = ScriptedLink::failing_at(index);
        let writes = link.writes_handle();
        let closed = link.closed_handle();

        let err = run_send(link).unwrap_err();
        assert_eq!(err.stage(), stage);

        // No stage after the failing one was issued.
        assert_eq!(
            writes.lock().unwrap().len(),
            index,
            "stage {} failure leaked later commands",
            stage
        );
        assert!(
            closed.load(Ordering::SeqCst),
            "port left open after {} failure",
            stage
        );
    }
}

#[test]
fn test_read_error_is_delivery_unconfirmed() {
    let link = ScriptedLink::new(Err(io::Error::new(
        io::ErrorKind::TimedOut,
        "read timed out",
    )));
    let writes = link.writes_handle();
    let closed = link.closed_handle();

    let err = run_send(link).unwrap_err();
    assert!(matches!(err, TransportError::DeliveryUnconfirmed(_)));

    // All four commands went out before the confirm stage failed.
    assert_eq!(writes.lock().unwrap().len(), 4);
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_error_response_is_delivery_unconfirmed() {
    let link = ScriptedLink::new(Ok("ERROR".to_string()));
    let closed = link.closed_handle();

    let err = run_send(link).unwrap_err();
    match err {
        TransportError::DeliveryUnconfirmed(msg) => assert!(msg.contains("ERROR")),
        other => panic!("expected DeliveryUnconfirmed, got {:?}", other),
    }
    assert!(closed.load(Ordering::SeqCst));
}

#[test]
fn test_empty_response_is_delivery_unconfirmed() {
    let link = ScriptedLink::new(Ok(String::new()));

    let err = run_send(link).unwrap_err();
    assert!(matches!(err, TransportError::DeliveryUnconfirmed(_)));
}

#[test]
fn test_response_parsing_tolerates_crlf_noise() {
    assert!(is_send_confirmed("\r\nOK\r\n+CMGS: 12\r\n"));
    assert!(is_send_confirmed("some noise +CMGS:3"));
    assert!(is_send_confirmed("+CMGS: 255"));

    assert!(!is_send_confirmed("ERROR"));
    assert!(!is_send_confirmed(""));
    assert!(!is_send_confirmed("\r\n\r\n"));
    assert!(!is_send_confirmed("OK"));
}
