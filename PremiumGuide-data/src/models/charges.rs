use serde::{Deserialize, Serialize};

/// One row of the reference dataset
///
/// Only the `charges` column is read; the other columns of the file
/// (age, sex, bmi, region, ...) are ignored by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeRecord {
    /// Annual charge in the base currency
    pub charges: f64,
}

/// Aggregate of the `charges` column computed once at load time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargesSummary {
    /// Number of data rows read
    pub row_count: usize,

    /// Arithmetic mean of the charges column
    pub mean: f64,
}

impl ChargesSummary {
    /// Summarize a list of charges, `None` when the list is empty
    pub fn from_charges(charges: &[f64]) -> Option<Self> {
        if charges.is_empty() {
            return None;
        }

        let total: f64 = charges.iter().sum();
        Some(Self {
            row_count: charges.len(),
            mean: total / charges.len() as f64,
        })
    }
}
