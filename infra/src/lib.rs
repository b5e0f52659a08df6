//! # Infrastructure Layer
//!
//! Concrete implementations of the core capability traits:
//!
//! - **Cache**: Redis-backed expiring key-value storage for OTP codes
//! - **Modem**: AT-command SMS transport over a serial link
//!
//! Both adapters translate their own failures into the typed domain errors
//! from `otp_core::errors` before they cross the layer boundary.

/// Cache module - Redis client and the OTP store adapter
pub mod cache;

/// Modem module - serial AT-command SMS transport
pub mod modem;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfraError {
    /// Redis cache error
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
