use std::path::PathBuf;
use thiserror::Error;

/// Error type for artifact loading and model evaluation
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file could not be opened or read
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path of the artifact
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid JSON for a regression model
    #[error("Model format error: {0}")]
    ModelFormat(#[from] serde_json::Error),

    /// The model file parsed but describes an unusable model
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// The dataset could not be parsed as delimited text
    #[error("Dataset format error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset header has no column with the required name
    #[error("Dataset is missing the '{0}' column")]
    MissingColumn(String),

    /// The dataset has a header but no data rows
    #[error("Dataset has no rows: {0}")]
    EmptyDataset(String),

    /// The dataset contains a value that cannot be averaged
    #[error("Invalid dataset value: {0}")]
    InvalidValue(String),

    /// The model produced an unusable output
    #[error("Prediction error: {0}")]
    Prediction(String),
}

impl ArtifactError {
    /// Build an I/O error tagged with the artifact path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArtifactError::Io {
            path: path.into(),
            source,
        }
    }
}
