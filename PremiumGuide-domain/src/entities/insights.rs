use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::premium::DatasetComparison;

/// One row of the input echo table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct InputEchoRow {
    /// Field label
    pub feature: String,
    /// Current value as displayed
    pub value: String,
}

/// Read-only side panel shown next to the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct InsightPanel {
    /// Current inputs in table form
    pub input_echo: Vec<InputEchoRow>,

    /// Advisory keyed on smoker status
    pub smoker_insight: String,

    /// Advisory keyed on BMI category
    pub bmi_insight: String,

    /// Comparison with the dataset average, once a premium exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_comparison: Option<DatasetComparison>,

    /// Personalized health suggestion
    pub suggestion: String,
}
