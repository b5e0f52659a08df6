//! OTP lifecycle service module
//!
//! This module drives the full OTP workflow:
//! - random 6-digit code generation
//! - storage with a fixed TTL (one live code per phone number)
//! - delivery over the SMS transport
//! - validation of user-submitted codes against the stored value

mod config;
pub mod generator;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::{OtpStore, SmsTransport};
