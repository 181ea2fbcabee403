use axum::{http::StatusCode, response::IntoResponse, Json, Extension};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;
use std::time::{SystemTime, UNIX_EPOCH};
use std::sync::{Once, Arc};
use once_cell::sync::OnceCell;
use async_trait::async_trait;

use premium_guide_domain::health::{self, HealthServiceTrait, SystemStatus, ComponentStatus as DomainComponentStatus, SystemHealth};
use premium_guide_domain::services::PremiumServiceTrait;

/// Health check response with artifact status
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Current service status ("ok", "degraded", or "error")
    pub status: String,
    /// Current application version from Cargo manifest
    pub version: String,
    /// Timestamp of when the response was generated
    pub timestamp: u64,
    /// Uptime of the service in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    /// Details about the loaded artifacts
    pub components: ComponentStatus,
    /// Environment information
    pub environment: String,
}

/// Status of individual system components
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentStatus {
    /// Regression model status
    pub model: ComponentHealthStatus,
    /// Reference dataset status
    pub dataset: ComponentHealthStatus,
}

/// Health status for an individual component
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ComponentHealthStatus {
    /// Status of the component ("ok", "degraded", or "error")
    pub status: String,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Deployment environment reported by the health check
#[derive(Debug, Clone)]
pub struct AppEnvironment(pub String);

// Track the time when the server started using a thread-safe OnceCell
static SERVER_START_TIME: OnceCell<u64> = OnceCell::new();
static INIT: Once = Once::new();

// Initialize the server start time
pub fn initialize_server_start_time() {
    INIT.call_once(|| {
        let _ = SERVER_START_TIME.set(unix_now());
    });
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Health check endpoint to verify the API is running
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "API is healthy", body = HealthResponse),
        (status = 500, description = "API is not healthy", body = HealthResponse),
        (status = 503, description = "API is degraded", body = HealthResponse)
    ),
    tag = "health"
)]
#[instrument(skip(health_service))]
pub async fn health_check(
    Extension(health_service): Extension<Arc<dyn HealthServiceTrait>>,
    Extension(environment): Extension<AppEnvironment>,
) -> impl IntoResponse {
    info!("Health check requested");

    let now = unix_now();
    let uptime = SERVER_START_TIME.get().map(|&start_time| now.saturating_sub(start_time));

    let system_health = health_service.get_system_health().await;

    let overall_status = match system_health.status {
        SystemStatus::Healthy => "ok",
        SystemStatus::Degraded => "degraded",
        SystemStatus::Unhealthy => "error",
    };

    let response = HealthResponse {
        status: overall_status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: now,
        uptime,
        components: ComponentStatus {
            model: component_health(&system_health, "model"),
            dataset: component_health(&system_health, "dataset"),
        },
        environment: environment.0,
    };

    // Return appropriate status code based on overall status
    let status = match overall_status {
        "ok" => StatusCode::OK,
        "degraded" => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(response))
}

fn component_health(system_health: &SystemHealth, name: &str) -> ComponentHealthStatus {
    match system_health.components.get(name) {
        Some(component) => ComponentHealthStatus {
            status: map_component_status(&component.status),
            message: component.details.clone(),
        },
        None => ComponentHealthStatus {
            status: "error".to_string(),
            message: Some(format!("No {} status reported", name)),
        },
    }
}

/// Map domain component status to API status string
fn map_component_status(status: &DomainComponentStatus) -> String {
    match status {
        DomainComponentStatus::Healthy => "ok",
        DomainComponentStatus::Degraded => "degraded",
        DomainComponentStatus::Unhealthy => "error",
    }.to_string()
}

/// Health service backed by the loaded premium service
pub struct HealthService {
    service: Arc<dyn PremiumServiceTrait>,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("model", &self.service.model_description())
            .field("dataset_rows", &self.service.dataset_rows())
            .finish()
    }
}

impl HealthService {
    /// Create a new health service
    pub fn new(service: Arc<dyn PremiumServiceTrait>) -> Self {
        HealthService { service }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        health::get_system_health(self.service.as_ref()).await
    }
}

/// Factory function to create a health service
pub fn create_health_service(service: Arc<dyn PremiumServiceTrait>) -> Arc<dyn HealthServiceTrait> {
    Arc::new(HealthService::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use premium_guide_domain::testing::{create_mock_premium_service, MockHealthService};

    fn test_environment() -> Extension<AppEnvironment> {
        Extension(AppEnvironment("test".to_string()))
    }

    #[tokio::test]
    async fn test_health_check_response() {
        initialize_server_start_time();

        let health_service = Arc::new(MockHealthService::new()) as Arc<dyn HealthServiceTrait>;
        let response = health_check(Extension(health_service), test_environment()).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_degraded_dataset_returns_503() {
        let health_service =
            Arc::new(MockHealthService::new().with_degraded_dataset()) as Arc<dyn HealthServiceTrait>;
        let response = health_check(Extension(health_service), test_environment()).await.into_response();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_broken_model_returns_500() {
        let health_service =
            Arc::new(MockHealthService::new().with_unhealthy_model()) as Arc<dyn HealthServiceTrait>;
        let response = health_check(Extension(health_service), test_environment()).await.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_service_probes_artifacts() {
        let service = Arc::new(create_mock_premium_service(3000.0, 2500.0));
        let health_service = create_health_service(service);

        let health = health_service.get_system_health().await;
        assert_eq!(health.status, SystemStatus::Healthy);
        assert_eq!(health.components["model"].status, DomainComponentStatus::Healthy);
    }
}
