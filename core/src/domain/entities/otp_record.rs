//! OTP record entity.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::otp::generator;

/// Length of a one-time passcode
pub const CODE_LENGTH: usize = 6;

/// Default validity window for a stored code (5 minutes)
pub const DEFAULT_TTL_SECONDS: u64 = 300;

/// A one-time passcode bound to a phone number
///
/// The record is owned by the OTP store once saved; at most one live record
/// exists per phone number, and a newer send overwrites any older one. The
/// store enforces expiry itself via TTL; `expires_at` here only mirrors that
/// window for logging and inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Phone number this code was issued for (E.164 format)
    pub phone: String,

    /// The 6-digit passcode
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Create a new record with a freshly generated random 6-digit code
    pub fn new(phone: String, ttl: Duration) -> Self {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::milliseconds(ttl.as_millis() as i64);

        Self {
            phone,
            code: generator::generate_code(),
            created_at: now,
            expires_at,
        }
    }

    /// Check whether the record's validity window has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_six_digit_code() {
        let record = OtpRecord::new("+14155552671".to_string(), Duration::from_secs(300));
        assert_eq!(record.code.len(), CODE_LENGTH);
        assert!(record.code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(record.phone, "+14155552671");
    }

    #[test]
    fn test_new_record_is_not_expired() {
        let record = OtpRecord::new("+14155552671".to_string(), Duration::from_secs(300));
        assert!(!record.is_expired());
    }

    #[test]
    fn test_record_with_zero_ttl_expires() {
        let record = OtpRecord::new("+14155552671".to_string(), Duration::from_millis(0));
        std::thread::sleep(Duration::from_millis(5));
        assert!(record.is_expired());
    }
}
