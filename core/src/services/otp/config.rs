//! Configuration for the OTP lifecycle service

use std::time::Duration;

use crate::domain::entities::otp_record::DEFAULT_TTL_SECONDS;

/// Configuration for the OTP lifecycle service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Validity window applied uniformly to every saved code
    pub ttl: Duration,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_TTL_SECONDS),
        }
    }
}

impl From<&otp_shared::config::OtpConfig> for OtpServiceConfig {
    fn from(config: &otp_shared::config::OtpConfig) -> Self {
        Self {
            ttl: Duration::from_secs(config.ttl_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_five_minutes() {
        let config = OtpServiceConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
    }

    #[test]
    fn test_from_shared_config() {
        let shared = otp_shared::config::OtpConfig { ttl_seconds: 120 };
        let config = OtpServiceConfig::from(&shared);
        assert_eq!(config.ttl, Duration::from_secs(120));
    }
}
