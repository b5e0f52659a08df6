use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::{error, info};

use otp_api::app::create_app;
use otp_api::routes::otp::AppState;
use otp_core::services::otp::{OtpService, OtpServiceConfig};
use otp_infra::cache::{RedisClient, RedisOtpStore};
use otp_infra::modem::SerialSmsTransport;
use otp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OTP gateway");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    // Redis is mandatory: stored codes live nowhere else, so fail fast
    // instead of serving requests that can only error.
    let redis_client = match RedisClient::new(&config.cache).await {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to connect to Redis at startup: {}", e);
            std::process::exit(1);
        }
    };
    match redis_client.health_check().await {
        Ok(true) => info!("Redis connection verified"),
        Ok(false) | Err(_) => {
            error!("Redis health check failed at startup");
            std::process::exit(1);
        }
    }

    let store = Arc::new(RedisOtpStore::new(redis_client));
    let transport = Arc::new(SerialSmsTransport::new(config.serial.clone()));
    let otp_service = Arc::new(OtpService::new(
        store,
        transport,
        OtpServiceConfig::from(&config.otp),
    ));

    let app_state = web::Data::new(AppState {
        otp_service: otp_service.clone(),
    });

    info!(
        "Serial modem configured on {} at {} baud",
        config.serial.port_name, config.serial.baud_rate
    );

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    info!("Server is up and running on {}", bind_address);
    server.bind(&bind_address)?.run().await
}
