use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::entities::conversions;
use crate::entities::premium::PremiumPrediction;
use crate::entities::profile::{ProfileInput, UserProfile};
use crate::services::pricing::PricingPolicy;
use premium_guide_data::config::ArtifactConfig;
use premium_guide_data::models::LinearRegressionModel;
use premium_guide_data::repository::{
    ArtifactError, ChargesDataset, CsvChargesDataset, PremiumModel,
};

/// Premium service errors
#[derive(Debug, Error)]
pub enum PremiumServiceError {
    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The model could not produce a usable prediction
    #[error("Prediction error: {0}")]
    PredictionError(String),

    /// An artifact could not be loaded
    #[error("Artifact error: {0}")]
    ArtifactError(#[from] ArtifactError),

    /// Session state could not be accessed
    #[error("Session error: {0}")]
    SessionError(String),
}

/// Trait for premium service operations
pub trait PremiumServiceTrait: Send + Sync {
    /// Validate raw widget values against their declared ranges
    fn validate_input(&self, input: &ProfileInput) -> Result<(), PremiumServiceError>;

    /// Run the model for a profile and convert the result to the display currency
    fn predict_premium(&self, profile: &UserProfile) -> Result<PremiumPrediction, PremiumServiceError>;

    /// Dataset average premium in the display currency
    fn average_premium(&self) -> f64;

    /// Conversion and floor in effect
    fn pricing(&self) -> PricingPolicy;

    /// Description of the loaded model
    fn model_description(&self) -> String;

    /// Number of rows in the reference dataset
    fn dataset_rows(&self) -> usize;
}

/// Premium service combining the model, the dataset and the pricing policy
pub struct PremiumService<M: PremiumModel, D: ChargesDataset> {
    model: M,
    dataset: D,
    pricing: PricingPolicy,
}

impl<M: PremiumModel, D: ChargesDataset> PremiumService<M, D> {
    /// Create a new premium service
    pub fn new(model: M, dataset: D, pricing: PricingPolicy) -> Self {
        Self {
            model,
            dataset,
            pricing,
        }
    }

    /// Map artifact errors raised on the request path to service errors
    fn map_artifact_error(&self, err: ArtifactError) -> PremiumServiceError {
        match err {
            ArtifactError::Prediction(msg) => PremiumServiceError::PredictionError(msg),
            other => PremiumServiceError::ArtifactError(other),
        }
    }
}

impl<M: PremiumModel, D: ChargesDataset> PremiumServiceTrait for PremiumService<M, D> {
    fn validate_input(&self, input: &ProfileInput) -> Result<(), PremiumServiceError> {
        // Use the validator crate's validation
        if let Err(validation_errors) = input.validate() {
            // Convert validation errors to a meaningful error message
            let mut messages = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| {
                            if let Some(msg) = &err.message {
                                msg.to_string()
                            } else {
                                format!("Invalid {}", field)
                            }
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>();
            messages.sort();

            return Err(PremiumServiceError::ValidationError(messages.join("; ")));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    fn predict_premium(&self, profile: &UserProfile) -> Result<PremiumPrediction, PremiumServiceError> {
        let features = conversions::convert_to_data_features(profile);

        let model_output = self
            .model
            .predict(&features)
            .map_err(|e| self.map_artifact_error(e))?;

        let (premium, floored) = self.pricing.premium_from_model_output(model_output);
        debug!(
            "Model output {:.2} converted to premium {:.2} (floored: {})",
            model_output, premium, floored
        );

        Ok(PremiumPrediction {
            profile: *profile,
            model_output,
            premium,
            floored,
            predicted_at: Utc::now(),
        })
    }

    fn average_premium(&self) -> f64 {
        self.pricing.convert(self.dataset.mean_charges())
    }

    fn pricing(&self) -> PricingPolicy {
        self.pricing
    }

    fn model_description(&self) -> String {
        self.model.describe()
    }

    fn dataset_rows(&self) -> usize {
        self.dataset.row_count()
    }
}

/// Load both artifacts and build the service used by the application
///
/// Any missing or malformed artifact is returned as an error; callers treat
/// it as fatal.
pub fn create_default_premium_service(
    config: &ArtifactConfig,
    pricing: PricingPolicy,
) -> Result<PremiumService<LinearRegressionModel, CsvChargesDataset>, PremiumServiceError> {
    let model = LinearRegressionModel::from_path(&config.model_path)?;
    let dataset = CsvChargesDataset::from_path(&config.dataset_path)?;

    info!(
        "Artifacts loaded: {}, {} dataset rows",
        model.describe(),
        dataset.row_count()
    );

    Ok(PremiumService::new(model, dataset, pricing))
}
