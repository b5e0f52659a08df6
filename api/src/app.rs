//! Application factory
//!
//! Builds the Actix-web application over a generic store and transport so
//! integration tests can run the real routing table against in-process fakes.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use otp_core::services::otp::{OtpStore, SmsTransport};

use crate::routes::otp::{send_otp, validate_otp, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<S, T>(
    app_state: web::Data<AppState<S, T>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    S: OtpStore + 'static,
    T: SmsTransport + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // OTP lifecycle endpoints
        .route("/sendOTP", web::post().to(send_otp::<S, T>))
        .route("/validateOTP", web::post().to(validate_otp::<S, T>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "otp-gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
