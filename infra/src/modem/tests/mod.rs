//! Tests for the modem transport

mod session_tests;
