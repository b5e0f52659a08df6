//! Redis-backed OTP store
//!
//! Implements the core `OtpStore` contract on top of [`RedisClient`]:
//! - one key per phone number (`otp:code:{phone}`), so a new save overwrites
//!   the previous code atomically (last-write-wins)
//! - expiry is enforced by Redis itself via key TTL; an expired code reads
//!   back as absent
//! - any Redis failure surfaces as `StoreError::Unavailable`

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use otp_core::errors::StoreError;
use otp_core::services::otp::OtpStore;
use otp_shared::utils::phone::mask_phone;

use crate::cache::RedisClient;

/// Expiring key-value store for OTP codes backed by Redis
#[derive(Clone)]
pub struct RedisOtpStore {
    /// Redis client for cache operations
    client: RedisClient,
}

impl RedisOtpStore {
    /// Create a new store on top of an established Redis connection
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    /// Format the Redis key for a phone number's current code
    fn format_code_key(phone: &str) -> String {
        format!("otp:code:{}", phone)
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn save(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), StoreError> {
        let key = Self::format_code_key(phone);

        debug!(
            phone = %mask_phone(phone),
            ttl_ms = ttl.as_millis() as u64,
            "Storing passcode"
        );

        self.client
            .set_with_expiry(&key, code, ttl)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn get(&self, phone: &str) -> Result<Option<String>, StoreError> {
        let key = Self::format_code_key(phone);

        debug!(phone = %mask_phone(phone), "Fetching passcode");

        self.client
            .get(&key)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
