//! OTP policy configuration

use serde::{Deserialize, Serialize};

/// OTP policy configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Validity window for a stored code, in seconds
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let ttl_seconds = std::env::var("OTP_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_ttl_seconds);

        Self { ttl_seconds }
    }
}

fn default_ttl_seconds() -> u64 {
    300 // 5 minutes
}
