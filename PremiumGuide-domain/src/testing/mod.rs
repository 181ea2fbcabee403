// Testing utilities and mock implementations for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export the in-memory artifacts from the data layer
pub use premium_guide_data::repository::{FixedModel, InMemoryChargesDataset};

use std::collections::HashMap;
use async_trait::async_trait;

use crate::health::{ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus};
use crate::services::premium::PremiumService;
use crate::services::pricing::PricingPolicy;

/// Service type returned by the mock factory
pub type MockPremiumService = PremiumService<FixedModel, InMemoryChargesDataset>;

/// Create a premium service whose model always returns `model_output`
/// and whose dataset averages to `mean_charges` (both in the base currency)
pub fn create_mock_premium_service(model_output: f64, mean_charges: f64) -> MockPremiumService {
    PremiumService::new(
        FixedModel::new(model_output),
        InMemoryChargesDataset::with_mean(mean_charges),
        PricingPolicy::default(),
    )
}

/// Mock implementation of the HealthServiceTrait for testing
#[derive(Debug, Clone)]
pub struct MockHealthService {
    status: SystemStatus,
    components: HashMap<String, HealthComponent>,
}

impl Default for MockHealthService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHealthService {
    /// Create a mock reporting every component healthy
    pub fn new() -> Self {
        let mut components = HashMap::new();
        for name in ["model", "dataset"] {
            components.insert(
                name.to_string(),
                HealthComponent {
                    status: ComponentStatus::Healthy,
                    details: None,
                },
            );
        }

        Self {
            status: SystemStatus::Healthy,
            components,
        }
    }

    /// Configure the mock to report a degraded dataset
    pub fn with_degraded_dataset(mut self) -> Self {
        self.status = SystemStatus::Degraded;
        self.components.insert(
            "dataset".to_string(),
            HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("Dataset average is unusable".to_string()),
            },
        );
        self
    }

    /// Configure the mock to report a broken model
    pub fn with_unhealthy_model(mut self) -> Self {
        self.status = SystemStatus::Unhealthy;
        self.components.insert(
            "model".to_string(),
            HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some("Model probe failed".to_string()),
            },
        );
        self
    }
}

#[async_trait]
impl HealthServiceTrait for MockHealthService {
    async fn get_system_health(&self) -> SystemHealth {
        SystemHealth {
            status: self.status.clone(),
            components: self.components.clone(),
        }
    }
}
