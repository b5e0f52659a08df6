//! OTP endpoint handlers

pub mod send;
pub mod validate;

use std::sync::Arc;

use otp_core::services::otp::{OtpService, OtpStore, SmsTransport};

pub use send::send_otp;
pub use validate::validate_otp;

/// Application state that holds the shared lifecycle service
pub struct AppState<S, T>
where
    S: OtpStore,
    T: SmsTransport,
{
    pub otp_service: Arc<OtpService<S, T>>,
}
