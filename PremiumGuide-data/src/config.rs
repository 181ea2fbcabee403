//! Artifact configuration for the PremiumGuide estimator
//!
//! Both artifacts live in a data directory by default:
//! - `model.json` (serialized linear regression)
//! - `insurance.csv` (reference dataset with a `charges` column)
//!
//! Each path can be overridden individually through the environment.

use std::env;
use std::path::PathBuf;
use tracing::info;

/// Default directory holding the artifacts
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default model file name inside the data directory
pub const DEFAULT_MODEL_FILE: &str = "model.json";

/// Default dataset file name inside the data directory
pub const DEFAULT_DATASET_FILE: &str = "insurance.csv";

/// Locations of the two static artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Path to the serialized model
    pub model_path: PathBuf,
    /// Path to the reference dataset
    pub dataset_path: PathBuf,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl ArtifactConfig {
    /// Artifacts with their default file names inside `data_dir`
    pub fn in_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            model_path: data_dir.join(DEFAULT_MODEL_FILE),
            dataset_path: data_dir.join(DEFAULT_DATASET_FILE),
        }
    }

    /// Create a configuration from `DATA_DIR`, `MODEL_PATH` and `DATASET_PATH`
    pub fn from_env() -> Self {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        let defaults = Self::in_dir(&data_dir);

        let model_path = env::var("MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.model_path);

        let dataset_path = env::var("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.dataset_path);

        info!(
            "Artifact configuration: model={}, dataset={}",
            model_path.display(),
            dataset_path.display()
        );

        Self {
            model_path,
            dataset_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_config_default() {
        let config = ArtifactConfig::default();
        assert_eq!(config.model_path, PathBuf::from("data").join("model.json"));
        assert_eq!(config.dataset_path, PathBuf::from("data").join("insurance.csv"));
    }

    #[test]
    fn test_artifact_config_in_dir() {
        let config = ArtifactConfig::in_dir("/srv/premium");
        assert_eq!(config.model_path, PathBuf::from("/srv/premium/model.json"));
        assert_eq!(config.dataset_path, PathBuf::from("/srv/premium/insurance.csv"));
    }
}
