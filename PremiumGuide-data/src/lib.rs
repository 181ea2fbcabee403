// PremiumGuide Data
// This crate loads the static artifacts the estimator consumes

// Artifact locations resolved from the environment
pub mod config;

// Loaders and collaborator traits for the model and dataset
pub mod repository;

// Artifact storage models
pub mod models;
