use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use premium_guide_domain::entities::profile::{
    clamp_signed, BmiMode, ProfileInput, Sex, Smoker, AGE_RANGE, CHILDREN_RANGE, HEIGHT_CM_RANGE,
    WEIGHT_KG_RANGE,
};
use premium_guide_domain::services::FormAction;

/// Fields posted by the HTML form
///
/// Every field is optional: a field the page did not render keeps the
/// session's current value. Numbers are read signed so that a negative
/// entry can be clamped instead of rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormSubmission {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub age: Option<i64>,
    pub sex: Option<Sex>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub children: Option<i64>,
    pub smoker: Option<Smoker>,
    pub bmi_mode: Option<BmiMode>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bmi: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub height_cm: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub weight_kg: Option<i64>,
    pub action: Option<FormAction>,
}

/// A cleared number box posts an empty string; treat it as absent
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

impl FormSubmission {
    /// Merge the submission over the current widget values
    ///
    /// Integer fields are clamped here, at the widget boundary; the BMI is
    /// clamped when the session applies the input.
    pub fn merge_into(self, current: &ProfileInput) -> (ProfileInput, FormAction) {
        let bmi_mode = self.bmi_mode.unwrap_or(current.bmi_mode);

        // The BMI box is not rendered in calculate mode, so switching to a
        // known BMI starts from the value just calculated
        let bmi = match self.bmi {
            Some(bmi) => bmi,
            None if current.bmi_mode == BmiMode::Calculate && bmi_mode == BmiMode::Known => {
                current.resolved_bmi()
            }
            None => current.bmi,
        };

        let input = ProfileInput {
            age: self.age.map_or(current.age, |v| clamp_signed(v, &AGE_RANGE)),
            sex: self.sex.unwrap_or(current.sex),
            children: self
                .children
                .map_or(current.children, |v| clamp_signed(v, &CHILDREN_RANGE)),
            smoker: self.smoker.unwrap_or(current.smoker),
            bmi_mode,
            bmi,
            height_cm: self
                .height_cm
                .map_or(current.height_cm, |v| clamp_signed(v, &HEIGHT_CM_RANGE)),
            weight_kg: self
                .weight_kg
                .map_or(current.weight_kg, |v| clamp_signed(v, &WEIGHT_KG_RANGE)),
        };

        (input, self.action.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_keep_current_values() {
        let current = ProfileInput {
            age: 44,
            bmi: 31.0,
            ..ProfileInput::default()
        };
        let submission = FormSubmission {
            smoker: Some(Smoker::Yes),
            ..FormSubmission::default()
        };

        let (input, action) = submission.merge_into(&current);
        assert_eq!(input.age, 44);
        assert_eq!(input.bmi, 31.0);
        assert_eq!(input.smoker, Smoker::Yes);
        assert_eq!(action, FormAction::Update);
    }

    #[test]
    fn test_out_of_range_entries_are_clamped() {
        let submission = FormSubmission {
            age: Some(-3),
            children: Some(25),
            height_cm: Some(20),
            weight_kg: Some(900),
            action: Some(FormAction::Predict),
            ..FormSubmission::default()
        };

        let (input, action) = submission.merge_into(&ProfileInput::default());
        assert_eq!(input.age, 0);
        assert_eq!(input.children, 10);
        assert_eq!(input.height_cm, 100);
        assert_eq!(input.weight_kg, 200);
        assert_eq!(action, FormAction::Predict);
    }

    #[test]
    fn test_switching_to_known_bmi_keeps_calculated_value() {
        let submission = FormSubmission {
            bmi_mode: Some(BmiMode::Known),
            ..FormSubmission::default()
        };

        let (input, _) = submission.merge_into(&ProfileInput::default());
        assert_eq!(input.bmi_mode, BmiMode::Known);
        assert_eq!(input.bmi, 24.22);
        assert_eq!(input.to_profile(), ProfileInput::default().to_profile());
    }

    #[test]
    fn test_known_bmi_submission_wins_over_calculated() {
        let submission = FormSubmission {
            bmi_mode: Some(BmiMode::Known),
            bmi: Some(28.0),
            ..FormSubmission::default()
        };

        let (input, _) = submission.merge_into(&ProfileInput::default());
        assert_eq!(input.bmi, 28.0);
    }

    #[test]
    fn test_empty_number_keeps_current_value() {
        let value = serde_json::json!({ "age": "", "bmi": " 27.5 ", "sex": "Female" });
        let submission: FormSubmission = serde_json::from_value(value).unwrap();
        assert_eq!(submission.age, None);
        assert_eq!(submission.bmi, Some(27.5));
        assert_eq!(submission.sex, Some(Sex::Female));
    }
}
