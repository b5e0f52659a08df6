//! # Core Layer
//!
//! Domain layer for the OTP gateway. It owns the OTP lifecycle (generate,
//! store with expiry, deliver, validate) and the capability contracts the
//! infrastructure layer implements:
//!
//! - [`services::otp::OtpStore`]: durable expiring key-value storage for codes
//! - [`services::otp::SmsTransport`]: delivery of one SMS text message
//!
//! The lifecycle service never talks to Redis or the serial port directly; it
//! depends only on these traits, which keeps the domain testable against
//! in-memory fakes.

pub mod domain;
pub mod errors;
pub mod services;

pub use errors::{OtpError, OtpResult, StoreError, TransportError};
pub use services::otp::{OtpService, OtpServiceConfig, OtpStore, SmsTransport};
