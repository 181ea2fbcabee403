// PremiumGuide-api lib.rs
//
// Form shell and JSON endpoints for the PremiumGuide estimator.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
pub mod render;
