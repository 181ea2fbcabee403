pub mod handlers;
pub mod routes;
pub mod state;

use axum::Router;

use crate::config::ServerConfig;

pub use state::{AppState, PremiumServiceHandle};

/// Create the application router around a loaded premium service
pub fn create_application(service: PremiumServiceHandle, config: &ServerConfig) -> Router {
    routes::create_app(service, config)
}
