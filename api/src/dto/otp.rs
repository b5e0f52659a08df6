use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Phone number in E.164 format, e.g. "+14155552671"
    #[validate(length(min = 8, max = 16))]
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ValidateOtpRequest {
    /// Phone number in E.164 format
    #[validate(length(min = 8, max = 16))]
    pub phone_number: String,

    /// 6-digit passcode as received via SMS
    #[validate(length(equal = 6))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOtpResponse {
    pub message: String,
}
