use std::env;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Multiplier from the model's base currency (USD) to the display currency (INR)
pub const EXCHANGE_RATE: f64 = 83.0;

/// Lowest premium ever displayed, in the display currency
pub const PREMIUM_FLOOR: f64 = 2000.0;

/// Currency conversion and floor applied to raw model output
///
/// Both values are fixed policy, overridable from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct PricingPolicy {
    /// Base-to-display currency multiplier
    pub exchange_rate: f64,
    /// Minimum premium in the display currency
    pub premium_floor: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            exchange_rate: EXCHANGE_RATE,
            premium_floor: PREMIUM_FLOOR,
        }
    }
}

impl PricingPolicy {
    /// Read `EXCHANGE_RATE` and `PREMIUM_FLOOR` overrides from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let policy = Self {
            exchange_rate: read_positive("EXCHANGE_RATE", defaults.exchange_rate),
            premium_floor: read_positive("PREMIUM_FLOOR", defaults.premium_floor),
        };

        info!(
            "Pricing policy: exchange_rate={}, premium_floor={}",
            policy.exchange_rate, policy.premium_floor
        );
        policy
    }

    /// Convert a base-currency amount to the display currency
    pub fn convert(&self, base_amount: f64) -> f64 {
        base_amount * self.exchange_rate
    }

    /// Convert raw model output and apply the floor
    ///
    /// Returns the premium and whether the floor was applied.
    pub fn premium_from_model_output(&self, model_output: f64) -> (f64, bool) {
        let converted = self.convert(model_output);
        if converted < self.premium_floor {
            (self.premium_floor, true)
        } else {
            (converted, false)
        }
    }
}

fn read_positive(name: &str, default: f64) -> f64 {
    match env::var(name) {
        Ok(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => {
                warn!("Ignoring invalid {}={:?}, using {}", name, raw, default);
                default
            }
        },
        Err(_) => default,
    }
}
