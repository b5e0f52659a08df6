//! Domain services

pub mod otp;
