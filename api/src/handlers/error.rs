//! Domain error to HTTP response mapping
//!
//! The mapping keeps the three error families apart for the client:
//! expected validation outcomes (wrong code vs. no/expired code, so the user
//! can be guided to retry or resend), store connectivity failures, and
//! per-stage modem transport failures.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;

use otp_core::errors::{OtpError, TransportError};
use otp_shared::types::response::ApiResponse;

/// Build the HTTP response for a failed lifecycle operation
pub fn error_response(error: &OtpError, request_id: &str) -> HttpResponse {
    let (status, code) = status_and_code(error);

    let body: ApiResponse<()> =
        ApiResponse::error(code, error.to_string()).with_request_id(request_id.to_string());

    HttpResponse::build(status).json(body)
}

/// Map a domain error to its HTTP status and stable error code
pub fn status_and_code(error: &OtpError) -> (StatusCode, &'static str) {
    match error {
        OtpError::Mismatch => (StatusCode::BAD_REQUEST, "CODE_MISMATCH"),
        OtpError::Expired => (StatusCode::GONE, "CODE_EXPIRED"),
        OtpError::Store(_) => (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE"),
        OtpError::Transport(e) => (StatusCode::BAD_GATEWAY, transport_code(e)),
    }
}

fn transport_code(error: &TransportError) -> &'static str {
    match error {
        TransportError::PortUnavailable(_) => "PORT_UNAVAILABLE",
        TransportError::ModemInitFailed(_) => "MODEM_INIT_FAILED",
        TransportError::ModeSetFailed(_) => "MODE_SET_FAILED",
        TransportError::AddressFailed(_) => "ADDRESS_FAILED",
        TransportError::SendFailed(_) => "SEND_FAILED",
        TransportError::DeliveryUnconfirmed(_) => "DELIVERY_UNCONFIRMED",
        TransportError::TaskFailed(_) => "MODEM_TASK_FAILED",
    }
}
