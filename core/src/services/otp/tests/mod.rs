//! Tests for the OTP lifecycle service

mod mocks;
