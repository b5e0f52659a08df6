//! Serial SMS transport implementing the core `SmsTransport` contract

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{info, warn};

use otp_core::errors::TransportError;
use otp_core::services::otp::SmsTransport;
use otp_shared::config::SerialConfig;
use otp_shared::utils::phone::mask_phone;

use super::link::{ModemLink, SerialLink};
use super::session;

/// Opens a fresh link to the modem for each send
///
/// The factory seam lets tests drive the full transport, lock included,
/// without real hardware.
pub trait LinkFactory: Send + Sync + 'static {
    type Link: ModemLink;

    fn open(&self, config: &SerialConfig) -> Result<Self::Link, TransportError>;
}

/// Factory producing real serial links
pub struct SerialLinkFactory;

impl LinkFactory for SerialLinkFactory {
    type Link = SerialLink;

    fn open(&self, config: &SerialConfig) -> Result<SerialLink, TransportError> {
        SerialLink::open(config)
    }
}

/// SMS transport wrapping the single physical serial modem
///
/// There is exactly one modem on one port; two interleaved AT-command
/// sequences corrupt both sends, so an async mutex serializes every send
/// through this instance. Waiters queue on the lock rather than touching the
/// port. Each send opens the port, drives the handshake, and closes the port
/// again whether the send succeeded or not.
pub struct SerialSmsTransport<F: LinkFactory = SerialLinkFactory> {
    /// Serial device settings, read-only for the life of the process
    config: SerialConfig,
    /// Opens one link per send
    factory: Arc<F>,
    /// One physical port, one in-flight send
    send_lock: Mutex<()>,
}

impl SerialSmsTransport {
    /// Create a transport for the configured serial device
    pub fn new(config: SerialConfig) -> Self {
        Self::with_factory(config, SerialLinkFactory)
    }
}

impl<F: LinkFactory> SerialSmsTransport<F> {
    /// Create a transport that opens its links through the given factory
    pub fn with_factory(config: SerialConfig, factory: F) -> Self {
        Self {
            config,
            factory: Arc::new(factory),
            send_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<F: LinkFactory> SmsTransport for SerialSmsTransport<F> {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<(), TransportError> {
        let _guard = self.send_lock.lock().await;

        let config = self.config.clone();
        let factory = Arc::clone(&self.factory);
        let phone_owned = phone.to_string();
        let message_owned = message.to_string();
        let settle_delay = Duration::from_millis(config.settle_delay_ms);

        // serialport I/O is blocking; run the whole session off the runtime.
        let result = tokio::task::spawn_blocking(move || {
            let mut link = factory.open(&config)?;
            session::send_text_message(&mut link, &phone_owned, &message_owned, settle_delay)
            // `link` drops here, closing the port on every exit path
        })
        .await
        .map_err(|e| TransportError::TaskFailed(e.to_string()))?;

        match &result {
            Ok(()) => {
                info!(
                    phone = %mask_phone(phone),
                    port = %self.config.port_name,
                    "SMS delivered"
                );
            }
            Err(e) => {
                warn!(
                    phone = %mask_phone(phone),
                    port = %self.config.port_name,
                    stage = e.stage(),
                    error = %e,
                    "SMS send failed"
                );
            }
        }

        result
    }
}
