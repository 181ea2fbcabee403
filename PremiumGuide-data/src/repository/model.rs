use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use crate::models::regression::{FeatureVector, LinearRegressionModel};
use super::errors::ArtifactError;

/// A frozen regression model: five features in, one scalar out
///
/// The output is in the base currency of the training data. Conversion to
/// the display currency happens in the domain layer.
pub trait PremiumModel: Send + Sync {
    /// Predict the annual charge for one feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, ArtifactError>;

    /// Short human-readable description used by health reporting
    fn describe(&self) -> String;
}

impl LinearRegressionModel {
    /// Load and validate a model artifact from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        info!("Loading premium model from {}", path.display());

        let file = File::open(path).map_err(|e| ArtifactError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse and validate a model artifact from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let model: LinearRegressionModel = serde_json::from_reader(reader)?;
        model.validate()?;
        debug!(
            "Model loaded: intercept={}, coefficients={:?}",
            model.intercept, model.coefficients
        );
        Ok(model)
    }
}

impl PremiumModel for LinearRegressionModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, ArtifactError> {
        let value = self.evaluate(features);
        if !value.is_finite() {
            return Err(ArtifactError::Prediction(format!(
                "model returned a non-finite value for {:?}",
                features
            )));
        }
        Ok(value)
    }

    fn describe(&self) -> String {
        format!("{} with {} coefficients", self.model_type, self.coefficients.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_JSON: &str = r#"{
        "model_type": "linear_regression",
        "feature_names": ["age", "sex", "bmi", "children", "smoker"],
        "intercept": -12000.0,
        "coefficients": [250.0, -100.0, 330.0, 480.0, 23800.0]
    }"#;

    #[test]
    fn test_load_model_from_reader() {
        let model = LinearRegressionModel::from_reader(MODEL_JSON.as_bytes()).unwrap();
        assert_eq!(model.intercept, -12000.0);
        assert_eq!(model.coefficients.len(), 5);
    }

    #[test]
    fn test_predict_uses_feature_order() {
        let model = LinearRegressionModel::from_reader(MODEL_JSON.as_bytes()).unwrap();
        let features = [30.0, 1.0, 24.0, 0.0, 0.0];
        let expected = -12000.0 + 250.0 * 30.0 - 100.0 + 330.0 * 24.0;
        let value = model.predict(&features).unwrap();
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_malformed_json_is_format_error() {
        let result = LinearRegressionModel::from_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(ArtifactError::ModelFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LinearRegressionModel::from_path("does/not/exist/model.json");
        match result {
            Err(ArtifactError::Io { path, .. }) => {
                assert!(path.ends_with("model.json"));
            }
            other => panic!("expected I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_predict_rejects_non_finite_output() {
        let model = LinearRegressionModel::new(f64::MAX, [f64::MAX; 5]);
        let result = model.predict(&[2.0, 2.0, 2.0, 2.0, 2.0]);
        assert!(matches!(result, Err(ArtifactError::Prediction(_))));
    }

    #[test]
    fn test_describe_names_model_type() {
        let model = LinearRegressionModel::from_reader(MODEL_JSON.as_bytes()).unwrap();
        assert_eq!(model.describe(), "linear_regression with 5 coefficients");
    }
}
