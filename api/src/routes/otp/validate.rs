use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_core::services::otp::{OtpStore, SmsTransport};
use otp_shared::types::response::ApiResponse;
use otp_shared::utils::phone::{is_valid_phone, mask_phone};

use crate::dto::otp::{ValidateOtpRequest, ValidateOtpResponse};
use crate::handlers::error::error_response;

use super::AppState;

/// Handler for `POST /validateOTP`
///
/// Checks the submitted passcode against the stored one for the phone
/// number. An absent record is reported as expired.
pub async fn validate_otp<S, T>(
    state: web::Data<AppState<S, T>>,
    request: web::Json<ValidateOtpRequest>,
) -> HttpResponse
where
    S: OtpStore + 'static,
    T: SmsTransport + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    if let Err(validation_errors) = request.0.validate() {
        log::warn!(
            "[{}] Validation failed for validateOTP request: {:?}",
            request_id,
            validation_errors
        );
        let body: ApiResponse<()> = ApiResponse::error(
            "VALIDATION_ERROR",
            "Request body failed validation: phone_number and a 6-digit otp are required",
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
        let body: ApiResponse<()> = ApiResponse::error(
            "INVALID_PHONE_FORMAT",
            "Phone number must be in E.164 format, e.g. +14155552671",
        )
        .with_request_id(request_id);
        return HttpResponse::BadRequest().json(body);
    }

    log::info!(
        "[{}] Processing validateOTP request for phone: {}",
        request_id,
        mask_phone(&request.phone_number)
    );

    match state
        .otp_service
        .validate_otp(&request.phone_number, &request.otp)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(
            ApiResponse::success(ValidateOtpResponse {
                message: "OTP validated successfully".to_string(),
            })
            .with_request_id(request_id),
        ),
        Err(error) => {
            if error.is_validation_outcome() {
                log::info!("[{}] validateOTP rejected: {}", request_id, error);
            } else {
                log::error!("[{}] validateOTP failed: {}", request_id, error);
            }
            error_response(&error, &request_id)
        }
    }
}
