use axum::{
    routing::{get, post, put},
    Extension, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::api::handlers::{form, health, premium};
use crate::api::state::{AppState, PremiumServiceHandle};
use crate::config::ServerConfig;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(service: PremiumServiceHandle, config: &ServerConfig) -> Router {
    debug!("Creating application router");

    let health_service = health::create_health_service(service.clone());
    let state = AppState::new(service);

    // The interactive page
    let form_routes = Router::new().route("/", get(form::show_form).post(form::submit_form));

    debug!("Form routes configured");

    // JSON access to the same session, plus stateless helpers
    let api_routes = Router::new()
        .route("/session", get(premium::get_session))
        .route("/session/profile", put(premium::update_profile))
        .route("/session/predict", post(premium::predict_session))
        .route("/session/reset", post(premium::reset_session))
        .route("/premium/estimate", post(premium::estimate_premium))
        .route("/bmi", get(premium::calculate_bmi));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(health::AppEnvironment(config.app_env.clone())));

    debug!("Public routes configured");

    let app = Router::new()
        .merge(form_routes)
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(public_routes);

    debug!("Base routes merged");

    let app = add_swagger_ui(app).layer(TraceLayer::new_for_http());

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Health check service initialized");

    app
}

/// Add Swagger UI to the router
pub fn add_swagger_ui(app: Router) -> Router {
    app.merge(configure_swagger_routes())
}
