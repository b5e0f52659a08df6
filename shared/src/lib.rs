//! Shared utilities and common types for the OTP gateway
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response structures
//! - Utility functions (phone validation, masking, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CacheConfig, OtpConfig, SerialConfig, ServerConfig};
pub use types::response::{ApiResponse, ErrorBody};
pub use utils::phone;
