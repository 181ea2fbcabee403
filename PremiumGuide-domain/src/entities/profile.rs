use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Accepted age range in years
pub const AGE_RANGE: RangeInclusive<u32> = 0..=200;

/// Accepted number of children
pub const CHILDREN_RANGE: RangeInclusive<u32> = 0..=10;

/// Accepted directly-entered BMI
pub const BMI_RANGE: RangeInclusive<f64> = 10.0..=60.0;

/// Accepted height in centimetres
pub const HEIGHT_CM_RANGE: RangeInclusive<u32> = 100..=250;

/// Accepted weight in kilograms
pub const WEIGHT_KG_RANGE: RangeInclusive<u32> = 30..=200;

/// Biological sex as collected by the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// Binary encoding used by the model (Male = 1, Female = 0)
    pub fn as_feature(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 0.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// Smoker status as collected by the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum Smoker {
    Yes,
    #[default]
    No,
}

impl Smoker {
    /// Binary encoding used by the model (Yes = 1, No = 0)
    pub fn as_feature(self) -> f64 {
        match self {
            Smoker::Yes => 1.0,
            Smoker::No => 0.0,
        }
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Smoker::Yes => write!(f, "Yes"),
            Smoker::No => write!(f, "No"),
        }
    }
}

/// How the BMI is supplied: typed in, or calculated from height and weight
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BmiMode {
    /// The user knows their BMI and enters it directly
    Known,
    /// BMI is computed from height and weight
    #[default]
    Calculate,
}

/// Raw values of the input widgets
///
/// This is what the user edits. Height and weight are kept even when the
/// BMI is entered directly so switching modes does not lose them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(default)]
pub struct ProfileInput {
    /// Age in years
    #[validate(range(min = 0, max = 200, message = "Age must be between 0 and 200"))]
    pub age: u32,

    /// Biological sex
    pub sex: Sex,

    /// Number of children covered
    #[validate(range(min = 0, max = 10, message = "Children must be between 0 and 10"))]
    pub children: u32,

    /// Smoker status
    pub smoker: Smoker,

    /// Whether the BMI is entered or calculated
    pub bmi_mode: BmiMode,

    /// Directly entered BMI, used when `bmi_mode` is `known`
    #[validate(range(min = 10.0, max = 60.0, message = "BMI must be between 10.0 and 60.0"))]
    pub bmi: f64,

    /// Height in centimetres, used when `bmi_mode` is `calculate`
    #[validate(range(min = 100, max = 250, message = "Height must be between 100 and 250 cm"))]
    pub height_cm: u32,

    /// Weight in kilograms, used when `bmi_mode` is `calculate`
    #[validate(range(min = 30, max = 200, message = "Weight must be between 30 and 200 kg"))]
    pub weight_kg: u32,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            age: 30,
            sex: Sex::Male,
            children: 0,
            smoker: Smoker::No,
            bmi_mode: BmiMode::Calculate,
            bmi: 24.0,
            height_cm: 170,
            weight_kg: 70,
        }
    }
}

impl ProfileInput {
    /// Clamp every numeric widget value into its declared range
    ///
    /// A non-finite BMI falls back to the default value.
    pub fn clamped(self) -> Self {
        let bmi = if self.bmi.is_finite() {
            self.bmi.clamp(*BMI_RANGE.start(), *BMI_RANGE.end())
        } else {
            Self::default().bmi
        };

        Self {
            age: clamp_to(self.age, &AGE_RANGE),
            children: clamp_to(self.children, &CHILDREN_RANGE),
            bmi,
            height_cm: clamp_to(self.height_cm, &HEIGHT_CM_RANGE),
            weight_kg: clamp_to(self.weight_kg, &WEIGHT_KG_RANGE),
            ..self
        }
    }

    /// The BMI this input resolves to under its current mode
    pub fn resolved_bmi(&self) -> f64 {
        match self.bmi_mode {
            BmiMode::Known => self.bmi,
            BmiMode::Calculate => compute_bmi(self.height_cm, self.weight_kg),
        }
    }

    /// Resolve the widget values into the profile the derivations run on
    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            age: self.age,
            sex: self.sex,
            children: self.children,
            smoker: self.smoker,
            bmi: self.resolved_bmi(),
        }
    }
}

/// Clamp an unsigned widget value into its inclusive range
fn clamp_to(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Clamp a signed raw value (as typed into a form) into an unsigned range
pub fn clamp_signed(value: i64, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

/// The five attributes the premium is estimated from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct UserProfile {
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub sex: Sex,
    /// Number of children covered
    pub children: u32,
    /// Smoker status
    pub smoker: Smoker,
    /// Body-mass index
    pub bmi: f64,
}

/// BMI from height and weight, rounded to two decimals
pub fn compute_bmi(height_cm: u32, weight_kg: u32) -> f64 {
    let height_m = f64::from(height_cm) / 100.0;
    let bmi = f64::from(weight_kg) / (height_m * height_m);
    (bmi * 100.0).round() / 100.0
}

/// BMI as shown to the user, always with at least one decimal ("24.0", "24.22")
pub fn format_bmi(bmi: f64) -> String {
    if bmi.fract() == 0.0 {
        format!("{:.1}", bmi)
    } else {
        bmi.to_string()
    }
}

/// BMI category based on fixed thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 up to and including 24.9
    Normal,

    /// BMI above 24.9 up to and including 29.9
    Overweight,

    /// BMI above 29.9
    Obese,
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        write!(f, "{}", label)
    }
}
