pub mod insights;
pub mod premium;
pub mod pricing;
pub mod session;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use premium::{create_default_premium_service, PremiumService, PremiumServiceError, PremiumServiceTrait};
pub use pricing::{PricingPolicy, EXCHANGE_RATE, PREMIUM_FLOOR};
pub use session::{estimate, FormAction, FormSession, SessionView};

// Re-export mock service factory functions when the mock feature is enabled
#[cfg(feature = "mock")]
pub use crate::testing::create_mock_premium_service;
