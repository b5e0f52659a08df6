//! Capability traits for OTP storage and SMS delivery

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{StoreError, TransportError};

/// Durable expiring key-value storage for OTP codes
///
/// The store enforces expiry itself: an expired entry is indistinguishable
/// from one that never existed. Per-key atomicity is the store's concern;
/// callers rely on last-write-wins semantics.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Write or overwrite the code for a phone number with the given TTL
    async fn save(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), StoreError>;

    /// Fetch the live code for a phone number; `None` if absent or expired
    async fn get(&self, phone: &str) -> Result<Option<String>, StoreError>;
}

/// Delivery of a single SMS text message
///
/// Implementations wrap exactly one physical modem and must serialize
/// concurrent sends: two interleaved command sequences on one port corrupt
/// both sends.
#[async_trait]
pub trait SmsTransport: Send + Sync {
    /// Deliver one text message to the phone number
    async fn send_sms(&self, phone: &str, message: &str) -> Result<(), TransportError>;
}
