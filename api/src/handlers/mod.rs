//! Response construction helpers

pub mod error;

pub use error::error_response;
