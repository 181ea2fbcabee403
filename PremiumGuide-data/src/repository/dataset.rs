use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::models::charges::{ChargeRecord, ChargesSummary};
use super::errors::ArtifactError;

/// Column holding the annual charges in the reference dataset
pub const CHARGES_COLUMN: &str = "charges";

/// Reference dataset of historical charges
pub trait ChargesDataset: Send + Sync {
    /// Mean of the charges column in the base currency
    fn mean_charges(&self) -> f64;

    /// Number of rows the mean was computed over
    fn row_count(&self) -> usize;
}

/// Dataset loaded from a delimited text file
///
/// The file is read once; only the summary is kept in memory.
#[derive(Debug, Clone)]
pub struct CsvChargesDataset {
    summary: ChargesSummary,
}

impl CsvChargesDataset {
    /// Load the dataset from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        info!("Loading reference dataset from {}", path.display());

        let file = File::open(path).map_err(|e| ArtifactError::io(path, e))?;
        Self::from_reader(file)
    }

    /// Load the dataset from any reader producing CSV with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ArtifactError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if !headers.iter().any(|h| h == CHARGES_COLUMN) {
            return Err(ArtifactError::MissingColumn(CHARGES_COLUMN.to_string()));
        }

        let mut charges = Vec::new();
        for (index, record) in reader.deserialize::<ChargeRecord>().enumerate() {
            let record = record?;
            if !record.charges.is_finite() {
                // Row numbers are 1-based and skip the header line
                return Err(ArtifactError::InvalidValue(format!(
                    "non-finite charge on data row {}",
                    index + 1
                )));
            }
            charges.push(record.charges);
        }

        let summary = ChargesSummary::from_charges(&charges)
            .ok_or_else(|| ArtifactError::EmptyDataset("no data rows after header".to_string()))?;

        // The average is a divisor for every comparison
        if !(summary.mean.is_finite() && summary.mean > 0.0) {
            return Err(ArtifactError::InvalidValue(format!(
                "mean charges must be positive, got {}",
                summary.mean
            )));
        }

        debug!(
            "Dataset loaded: {} rows, mean charges {:.2}",
            summary.row_count, summary.mean
        );

        Ok(Self { summary })
    }
}

impl ChargesDataset for CsvChargesDataset {
    fn mean_charges(&self) -> f64 {
        self.summary.mean
    }

    fn row_count(&self) -> usize {
        self.summary.row_count
    }
}
