use crate::models::charges::ChargesSummary;
use crate::models::regression::FeatureVector;
use super::dataset::ChargesDataset;
use super::errors::ArtifactError;
use super::model::PremiumModel;

/// Model that returns the same output for every feature vector
#[derive(Debug, Clone, Copy)]
pub struct FixedModel {
    output: f64,
}

impl FixedModel {
    /// Create a model that always predicts `output`
    pub fn new(output: f64) -> Self {
        Self { output }
    }
}

impl PremiumModel for FixedModel {
    fn predict(&self, _features: &FeatureVector) -> Result<f64, ArtifactError> {
        if self.output.is_finite() {
            Ok(self.output)
        } else {
            Err(ArtifactError::Prediction("fixed model output is not finite".to_string()))
        }
    }

    fn describe(&self) -> String {
        format!("fixed model returning {}", self.output)
    }
}

/// Dataset held in memory instead of read from a file
#[derive(Debug, Clone, Copy)]
pub struct InMemoryChargesDataset {
    summary: ChargesSummary,
}

impl InMemoryChargesDataset {
    /// Build a dataset from raw charges; an empty list averages to zero
    pub fn from_charges(charges: &[f64]) -> Self {
        let summary = ChargesSummary::from_charges(charges).unwrap_or(ChargesSummary {
            row_count: 0,
            mean: 0.0,
        });
        Self { summary }
    }

    /// Build a dataset whose mean is exactly `mean`
    pub fn with_mean(mean: f64) -> Self {
        Self::from_charges(&[mean])
    }
}

impl ChargesDataset for InMemoryChargesDataset {
    fn mean_charges(&self) -> f64 {
        self.summary.mean
    }

    fn row_count(&self) -> usize {
        self.summary.row_count
    }
}
