// Domain entities and value objects
pub mod conversions;
pub mod insights;
pub mod premium;
pub mod profile;

// Re-export common types for easier imports
pub use insights::{InputEchoRow, InsightPanel};
pub use premium::{
    ComparisonTier, Currency, DatasetComparison, MessageLevel, PremiumComparison, PremiumPrediction,
};
pub use profile::{BmiCategory, BmiMode, ProfileInput, Sex, Smoker, UserProfile};
