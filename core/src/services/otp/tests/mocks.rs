//! Mock implementations for testing the OTP lifecycle service

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::errors::{StoreError, TransportError};
use crate::services::otp::traits::{OtpStore, SmsTransport};

/// In-memory store honoring the same contract as the Redis adapter,
/// including real TTL-based expiry
pub struct MemoryOtpStore {
    entries: Arc<Mutex<HashMap<String, (String, Instant)>>>, // phone -> (code, deadline)
    pub should_fail: bool,
}

impl MemoryOtpStore {
    pub fn new(should_fail: bool) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            should_fail,
        }
    }

    pub fn contains(&self, phone: &str) -> bool {
        let entries = self.entries.lock().unwrap();
        entries
            .get(phone)
            .map(|(_, deadline)| Instant::now() < *deadline)
            .unwrap_or(false)
    }
}

#[async_trait]
impl OtpStore for MemoryOtpStore {
    async fn save(&self, phone: &str, code: &str, ttl: Duration) -> Result<(), StoreError> {
        if self.should_fail {
            return Err(StoreError::Unavailable("store down".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(phone.to_string(), (code.to_string(), Instant::now() + ttl));
        Ok(())
    }

    async fn get(&self, phone: &str) -> Result<Option<String>, StoreError> {
        if self.should_fail {
            return Err(StoreError::Unavailable("store down".to_string()));
        }
        let mut entries = self.entries.lock().unwrap();
        match entries.get(phone) {
            Some((code, deadline)) if Instant::now() < *deadline => Ok(Some(code.clone())),
            Some(_) => {
                // Expired entries are garbage-collected on access, like Redis.
                entries.remove(phone);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

/// Mock transport recording every delivered message
pub struct MockSmsTransport {
    pub sent_messages: Arc<Mutex<Vec<(String, String)>>>, // (phone, message)
    pub fail_with: Option<fn() -> TransportError>,
}

impl MockSmsTransport {
    pub fn new() -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(fail_with: fn() -> TransportError) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(fail_with),
        }
    }

    pub fn sent_to(&self, phone: &str) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(p, _)| p == phone)
            .map(|(_, m)| m.clone())
    }

    pub fn send_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl SmsTransport for MockSmsTransport {
    async fn send_sms(&self, phone: &str, message: &str) -> Result<(), TransportError> {
        if let Some(make_error) = self.fail_with {
            return Err(make_error());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .push((phone.to_string(), message.to_string()));
        Ok(())
    }
}
