//! Domain layer health check functionality
//! This module reports whether the loaded artifacts are usable

use std::collections::HashMap;
use async_trait::async_trait;

use crate::entities::premium::Currency;
use crate::entities::profile::ProfileInput;
use crate::services::premium::PremiumServiceTrait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but its output is questionable
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;
}

/// Probe the model with the default profile
///
/// Returns the model description on success, or the prediction error.
pub fn check_model_status(service: &dyn PremiumServiceTrait) -> Result<String, String> {
    let profile = ProfileInput::default().to_profile();
    match service.predict_premium(&profile) {
        Ok(_) => Ok(service.model_description()),
        Err(e) => Err(format!("Model probe failed: {}", e)),
    }
}

/// Check that the dataset produced a usable average
///
/// Returns:
/// - Ok(details) if the average is usable
/// - Err if the dataset is empty or the average is not a finite positive number
pub fn check_dataset_status(service: &dyn PremiumServiceTrait) -> Result<String, String> {
    let average = service.average_premium();
    let rows = service.dataset_rows();

    if rows == 0 || !average.is_finite() || average <= 0.0 {
        return Err(format!(
            "Dataset average is unusable ({} rows, average {})",
            rows, average
        ));
    }

    Ok(format!("{} rows, average premium {}", rows, Currency(average)))
}

/// Get overall system health
pub async fn get_system_health(service: &dyn PremiumServiceTrait) -> SystemHealth {
    let model_component = match check_model_status(service) {
        Ok(details) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(details),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    // Predictions still work without a usable average, only the comparison suffers
    let dataset_component = match check_dataset_status(service) {
        Ok(details) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: Some(details),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Degraded,
            details: Some(e),
        },
    };

    let components: HashMap<String, HealthComponent> = vec![
        ("model".to_string(), model_component),
        ("dataset".to_string(), dataset_component),
    ]
    .into_iter()
    .collect();

    let overall_status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
        SystemStatus::Unhealthy
    } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
        SystemStatus::Degraded
    } else {
        SystemStatus::Healthy
    };

    SystemHealth {
        status: overall_status,
        components,
    }
}
