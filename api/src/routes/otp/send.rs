use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::services::otp::{OtpStore, SmsTransport};
use otp_shared::types::response::ApiResponse;
use otp_shared::utils::phone::{is_valid_phone, mask_phone};

use crate::dto::otp::{SendOtpRequest, SendOtpResponse};
use crate::handlers::error::error_response;

use super::AppState;

/// Handler for `POST /sendOTP`
///
/// Generates a fresh passcode for the phone number, stores it with the
/// configured TTL, and delivers it via the GSM modem.
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+14155552671" }
/// ```
pub async fn send_otp<S, T>(
    state: web::Data<AppState<S, T>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    T: SmsTransport + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(validation_errors) = request.0.validate() {
        log::warn!(
            "[{}] Validation failed for sendOTP request: {:?}",
            request_id,
            validation_errors
        );
        let body: ApiResponse<()> = ApiResponse::error(
            "VALIDATION_ERROR",
            "Request body failed validation: phone_number is required",
        )
        .with_request_id(request_id);
        return HttpResponse::BadRequest().json(body);
    }

    if !is_valid_phone(&request.phone_number) {
        log::warn!(
            "[{}] Invalid phone format: {}",
            request_id,
            mask_phone(&request.phone_number)
        );
        return bad_phone_response(&request_id);
    }

    log::info!(
        "[{}] Processing sendOTP request for phone: {}",
        request_id,
        mask_phone(&request.phone_number)
    );

    match state.otp_service.send_otp(&request.phone_number).await {
        Ok(()) => HttpResponse::Ok().json(
            ApiResponse::success(SendOtpResponse {
                message: "OTP sent successfully".to_string(),
            })
            .with_request_id(request_id),
        ),
        Err(error) => {
            log::error!("[{}] sendOTP failed: {}", request_id, error);
            error_response(&error, &request_id)
        }
    }
}

fn bad_phone_response(request_id: &str) -> HttpResponse {
    let body: ApiResponse<()> = ApiResponse::error(
        "INVALID_PHONE_FORMAT",
        "Phone number must be in E.164 format, e.g. +14155552671",
    )
    .with_request_id(request_id.to_string());
    HttpResponse::BadRequest().json(body)
}
