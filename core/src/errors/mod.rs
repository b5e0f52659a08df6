//! Domain-specific error types for the OTP lifecycle.
//!
//! The taxonomy keeps three concerns apart so the boundary can respond
//! appropriately: store connectivity failures, per-stage modem transport
//! failures, and expected validation outcomes (`Mismatch` / `Expired`).

use thiserror::Error;

/// Failures from the expiring key-value store backing OTP persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store is unreachable or the operation timed out
    #[error("otp store unavailable: {0}")]
    Unavailable(String),
}

/// Failures from the serial modem transport, one variant per protocol stage
///
/// Any stage failure aborts the remaining stages of the send; retry is a
/// whole-operation concern of the caller, never of the transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to open serial port: {0}")]
    PortUnavailable(String),

    #[error("failed to initialize modem: {0}")]
    ModemInitFailed(String),

    #[error("failed to set SMS text mode: {0}")]
    ModeSetFailed(String),

    #[error("failed to specify recipient number: {0}")]
    AddressFailed(String),

    #[error("failed to send message: {0}")]
    SendFailed(String),

    #[error("modem did not confirm delivery: {0}")]
    DeliveryUnconfirmed(String),

    /// The task driving the modem session died before reporting a stage
    /// outcome, so no protocol stage can be blamed
    #[error("modem task failed: {0}")]
    TaskFailed(String),
}

impl TransportError {
    /// Name of the protocol stage that failed, for logs and responses
    pub fn stage(&self) -> &'static str {
        match self {
            TransportError::PortUnavailable(_) => "open",
            TransportError::ModemInitFailed(_) => "init",
            TransportError::ModeSetFailed(_) => "mode",
            TransportError::AddressFailed(_) => "address",
            TransportError::SendFailed(_) => "payload",
            TransportError::DeliveryUnconfirmed(_) => "confirm",
            TransportError::TaskFailed(_) => "task",
        }
    }
}

/// Errors surfaced by the OTP lifecycle service
#[derive(Debug, Error)]
pub enum OtpError {
    /// The submitted code differs from the stored code
    #[error("verification code does not match")]
    Mismatch,

    /// No live code exists for the phone number: it expired or was never
    /// issued (the store cannot tell the two apart)
    #[error("verification code not found or expired")]
    Expired,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl OtpError {
    /// Whether this is an expected validation outcome rather than a
    /// store/transport failure
    pub fn is_validation_outcome(&self) -> bool {
        matches!(self, OtpError::Mismatch | OtpError::Expired)
    }
}

pub type OtpResult<T> = Result<T, OtpError>;
