// Storage models for the two static artifacts
pub mod charges;
pub mod regression;

pub use charges::{ChargeRecord, ChargesSummary};
pub use regression::{FeatureVector, LinearRegressionModel, FEATURE_COUNT, FEATURE_NAMES};
