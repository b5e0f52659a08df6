//! OTP lifecycle service implementation

use std::sync::Arc;

use otp_shared::utils::phone::mask_phone;
use tracing::{error, info};

use crate::domain::entities::otp_record::{OtpRecord, CODE_LENGTH};
use crate::errors::{OtpError, OtpResult};

use super::config::OtpServiceConfig;
use super::traits::{OtpStore, SmsTransport};

/// Lifecycle manager for one-time passcodes
///
/// Orchestrates generation, storage, delivery, and validation. Both
/// collaborators are passed in at construction and the service only depends
/// on their abstract contracts.
pub struct OtpService<S: OtpStore, T: SmsTransport> {
    /// Expiring key-value store holding the current code per phone number
    store: Arc<S>,
    /// SMS transport wrapping the single physical modem
    transport: Arc<T>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S: OtpStore, T: SmsTransport> OtpService<S, T> {
    /// Create a new OTP lifecycle service
    pub fn new(store: Arc<S>, transport: Arc<T>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            transport,
            config,
        }
    }

    /// Generate a fresh code, persist it with the configured TTL, and deliver
    /// it over SMS
    ///
    /// Persistence comes first: a code that was not durably recorded is never
    /// sent. If delivery fails after a successful save, the stored record
    /// stays live; the caller may retry delivery of the same code or request
    /// a new one, which overwrites it. The two failure modes are reported as
    /// distinct error kinds.
    pub async fn send_otp(&self, phone: &str) -> OtpResult<()> {
        let record = OtpRecord::new(phone.to_string(), self.config.ttl);

        info!(
            phone = %mask_phone(phone),
            event = "otp_generated",
            expires_at = %record.expires_at,
            "Generated new passcode"
        );

        self.store
            .save(&record.phone, &record.code, self.config.ttl)
            .await
            .map_err(|e| {
                error!(
                    phone = %mask_phone(phone),
                    event = "otp_store_failed",
                    error = %e,
                    "Failed to persist passcode, delivery aborted"
                );
                OtpError::Store(e)
            })?;

        let message = format!("Your OTP is: {}", record.code);
        self.transport.send_sms(phone, &message).await.map_err(|e| {
            error!(
                phone = %mask_phone(phone),
                event = "otp_delivery_failed",
                stage = e.stage(),
                error = %e,
                "Failed to deliver passcode; stored code remains live"
            );
            OtpError::Transport(e)
        })?;

        info!(
            phone = %mask_phone(phone),
            event = "otp_sent",
            "Passcode delivered"
        );

        Ok(())
    }

    /// Validate a user-submitted code against the stored value
    ///
    /// A missing record means the code expired or was never issued; the store
    /// cannot tell those apart, so both surface as [`OtpError::Expired`].
    /// Comparison is exact string equality; any difference, including
    /// length, is a [`OtpError::Mismatch`]. Successful validation does not
    /// consume the record; repeated correct submissions succeed until expiry.
    pub async fn validate_otp(&self, phone: &str, submitted: &str) -> OtpResult<()> {
        let stored = self.store.get(phone).await.map_err(|e| {
            error!(
                phone = %mask_phone(phone),
                event = "otp_lookup_failed",
                error = %e,
                "Failed to retrieve passcode from store"
            );
            OtpError::Store(e)
        })?;

        match stored {
            None => {
                info!(
                    phone = %mask_phone(phone),
                    event = "otp_expired",
                    "No live passcode for phone number"
                );
                Err(OtpError::Expired)
            }
            Some(code) if code == submitted => {
                info!(
                    phone = %mask_phone(phone),
                    event = "otp_validated",
                    "Passcode validated"
                );
                Ok(())
            }
            Some(_) => {
                info!(
                    phone = %mask_phone(phone),
                    event = "otp_mismatch",
                    submitted_len = submitted.len(),
                    expected_len = CODE_LENGTH,
                    "Submitted passcode does not match"
                );
                Err(OtpError::Mismatch)
            }
        }
    }
}
