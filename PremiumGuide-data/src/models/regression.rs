use serde::{Deserialize, Serialize};

use crate::repository::errors::ArtifactError;

/// Number of features the premium model consumes
pub const FEATURE_COUNT: usize = 5;

/// Feature order expected by the model: age, sex, bmi, children, smoker
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["age", "sex", "bmi", "children", "smoker"];

/// Model type tag accepted in the artifact file
pub const LINEAR_REGRESSION: &str = "linear_regression";

/// Ordered feature vector handed to the model
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Storage model for a serialized linear regression
///
/// The artifact is a JSON document such as:
///
/// ```json
/// {
///   "model_type": "linear_regression",
///   "feature_names": ["age", "sex", "bmi", "children", "smoker"],
///   "intercept": -11938.5,
///   "coefficients": [256.9, -131.3, 339.2, 475.5, 23848.5]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionModel {
    /// Model family tag
    pub model_type: String,

    /// Optional feature names recorded at training time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,

    /// Intercept term in the base currency
    pub intercept: f64,

    /// One coefficient per feature, in `FEATURE_NAMES` order
    pub coefficients: Vec<f64>,
}

impl LinearRegressionModel {
    /// Build a model from an intercept and coefficients
    pub fn new(intercept: f64, coefficients: FeatureVector) -> Self {
        Self {
            model_type: LINEAR_REGRESSION.to_string(),
            feature_names: Some(FEATURE_NAMES.iter().map(|name| name.to_string()).collect()),
            intercept,
            coefficients: coefficients.to_vec(),
        }
    }

    /// Check that the artifact describes a usable five-feature linear model
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.model_type != LINEAR_REGRESSION {
            return Err(ArtifactError::InvalidModel(format!(
                "unsupported model type '{}', expected '{}'",
                self.model_type, LINEAR_REGRESSION
            )));
        }

        if self.coefficients.len() != FEATURE_COUNT {
            return Err(ArtifactError::InvalidModel(format!(
                "expected {} coefficients, found {}",
                FEATURE_COUNT,
                self.coefficients.len()
            )));
        }

        if let Some(names) = &self.feature_names {
            let matches = names.len() == FEATURE_COUNT
                && names.iter().zip(FEATURE_NAMES.iter()).all(|(a, b)| a == b);
            if !matches {
                return Err(ArtifactError::InvalidModel(format!(
                    "feature names {:?} do not match {:?}",
                    names, FEATURE_NAMES
                )));
            }
        }

        if !self.intercept.is_finite() || self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::InvalidModel(
                "intercept and coefficients must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// Evaluate `intercept + coefficients . features`
    pub fn evaluate(&self, features: &FeatureVector) -> f64 {
        self.coefficients
            .iter()
            .zip(features.iter())
            .fold(self.intercept, |acc, (coefficient, value)| acc + coefficient * value)
    }
}
