pub mod capacity;
pub mod config;
pub mod error;
pub mod generator;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod state;

use actix_web::web;

use crate::error::ApiError;

pub use crate::capacity::CapacityTable;
pub use crate::config::Config;
pub use crate::state::AppState;

/// Registers every route. Shared by the binary and the HTTP tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into());

    cfg.app_data(json_config)
        .service(web::resource("/health").route(web::get().to(handlers::health)))
        .service(web::resource("/predict").route(web::post().to(handlers::predict)))
        .service(
            web::resource([
                "/locations/{id}/current-status",
                "/temples/{id}/current-status",
            ])
            .route(web::get().to(handlers::current_status)),
        )
        .service(
            web::resource("/simulate/surge/{id}").route(web::post().to(handlers::simulate_surge)),
        );
}
