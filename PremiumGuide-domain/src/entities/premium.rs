use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::profile::UserProfile;

/// Symbol of the display currency
pub const CURRENCY_SYMBOL: &str = "₹";

/// Premium estimate for one profile, in the display currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PremiumPrediction {
    /// Profile the estimate was computed for
    pub profile: UserProfile,

    /// Raw model output in the base currency
    pub model_output: f64,

    /// Annual premium after conversion and floor
    pub premium: f64,

    /// Whether the floor replaced the converted value
    pub floored: bool,

    /// When the estimate was computed
    pub predicted_at: DateTime<Utc>,
}

/// Colour tier of the premium relative to the dataset average
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum ComparisonTier {
    /// More than 5% below the average
    Favorable,

    /// Within 5% of the average
    Neutral,

    /// More than 5% above the average
    Unfavorable,
}

impl ComparisonTier {
    /// CSS colour used for the headline figure
    pub fn color(self) -> &'static str {
        match self {
            ComparisonTier::Favorable => "green",
            ComparisonTier::Neutral => "orange",
            ComparisonTier::Unfavorable => "red",
        }
    }
}

/// Premium compared against the dataset average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PremiumComparison {
    /// Estimated premium
    pub premium: f64,

    /// Dataset average premium, same currency
    pub average_premium: f64,

    /// Signed difference from the average, in percent
    pub diff_percent: f64,

    /// Colour tier
    pub tier: ComparisonTier,

    /// Display text, e.g. "5.0% lower"
    pub summary: String,
}

/// Tone of a side-panel message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Success,
    Warning,
}

/// Side-panel sentence comparing the premium with the dataset average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct DatasetComparison {
    /// Tone of the message
    pub level: MessageLevel,

    /// The sentence itself
    pub message: String,
}

/// Amount formatted as whole currency units with thousands separators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency(pub f64);

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}{}", sign, CURRENCY_SYMBOL, grouped)
    }
}
