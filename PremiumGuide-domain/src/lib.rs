// PremiumGuide Domain
// This crate contains the business logic for the PremiumGuide estimator

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the artifact configuration from premium_guide_data for convenience
pub use premium_guide_data::config;

// Testing utilities - only available with mock feature
#[cfg(feature = "mock")]
pub mod testing;
