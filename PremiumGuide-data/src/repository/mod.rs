// Repository module structure
pub mod errors;
mod dataset;
mod model;

#[cfg(any(test, feature = "mock"))]
mod in_memory;

// Re-export commonly used types
pub use errors::ArtifactError;
pub use dataset::{ChargesDataset, CsvChargesDataset, CHARGES_COLUMN};
pub use model::PremiumModel;

// Re-export in-memory artifacts for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use in_memory::{FixedModel, InMemoryChargesDataset};
