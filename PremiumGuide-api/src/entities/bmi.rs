use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use premium_guide_domain::entities::profile::BmiCategory;

/// Query parameters for the BMI calculator
#[derive(Debug, Clone, Deserialize, Validate, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BmiQuery {
    /// Height in centimetres (100-250)
    #[validate(range(min = 100, max = 250, message = "Height must be between 100 and 250 cm"))]
    pub height_cm: u32,

    /// Weight in kilograms (30-200)
    #[validate(range(min = 30, max = 200, message = "Weight must be between 30 and 200 kg"))]
    pub weight_kg: u32,
}

/// BMI calculator result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BmiResponse {
    /// BMI rounded to two decimals
    pub bmi: f64,

    /// Category of the BMI
    pub category: BmiCategory,
}
