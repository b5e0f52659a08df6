//! Configuration modules for the OTP gateway
//!
//! Each concern carries its own config struct with serde support and an
//! environment-variable constructor. Configuration is loaded once at process
//! start and is read-only afterwards.

pub mod cache;
pub mod otp;
pub mod serial;
pub mod server;

pub use cache::CacheConfig;
pub use otp::OtpConfig;
pub use serial::SerialConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Redis cache settings
    pub cache: CacheConfig,

    /// Serial port settings for the GSM modem
    pub serial: SerialConfig,

    /// OTP policy settings
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cache: CacheConfig::from_env(),
            serial: SerialConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}
