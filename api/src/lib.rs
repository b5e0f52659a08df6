//! HTTP boundary for the OTP gateway
//!
//! Thin request/response mapping over the core lifecycle service: two
//! endpoints (`POST /sendOTP`, `POST /validateOTP`) plus a health check.
//! All policy lives in `otp_core`; this crate validates input shapes and
//! maps domain errors onto HTTP status codes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod routes;
