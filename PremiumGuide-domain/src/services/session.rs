//! Interactive form session
//!
//! One session holds the widget values and, once the user presses
//! "Predict Premium", the last prediction. Every interaction runs the same
//! pass: inputs -> BMI -> category -> suggestion -> prediction (only when
//! triggered) -> comparison -> view.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use crate::entities::insights::InsightPanel;
use crate::entities::premium::{PremiumComparison, PremiumPrediction};
use crate::entities::profile::{BmiCategory, ProfileInput, UserProfile};
use crate::services::insights::{build_insight_panel, categorize_bmi, compare_premium, health_suggestion};
use crate::services::premium::{PremiumServiceError, PremiumServiceTrait};

/// What the user did in one interaction
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum FormAction {
    /// A field changed; re-derive only
    #[default]
    Update,
    /// The "Predict Premium" control was pressed
    Predict,
}

/// Everything the page displays, derived from the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct SessionView {
    /// Current widget values
    pub input: ProfileInput,

    /// Profile resolved from the widgets
    pub profile: UserProfile,

    /// BMI category of the profile
    pub bmi_category: BmiCategory,

    /// Health suggestion for the profile
    pub health_suggestion: String,

    /// Dataset average premium in the display currency
    pub average_premium: f64,

    /// Last prediction, if one is current
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<PremiumPrediction>,

    /// Comparison with the average, present with a prediction when the
    /// average is positive
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<PremiumComparison>,

    /// Side panel
    pub insights: InsightPanel,
}

/// Session state for the single interactive form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    input: ProfileInput,
    prediction: Option<PremiumPrediction>,
}

impl FormSession {
    /// A fresh session with default widget values
    pub fn new() -> Self {
        Self::default()
    }

    /// Current widget values
    pub fn input(&self) -> &ProfileInput {
        &self.input
    }

    /// Last prediction, if still current
    pub fn prediction(&self) -> Option<&PremiumPrediction> {
        self.prediction.as_ref()
    }

    /// Replace the widget values
    ///
    /// Values are clamped to their ranges. A prediction survives only if the
    /// resolved profile is unchanged.
    pub fn apply_input(&mut self, input: ProfileInput) {
        let input = input.clamped();
        let profile = input.to_profile();

        if let Some(prediction) = &self.prediction {
            if prediction.profile != profile {
                debug!("Inputs changed, discarding previous prediction");
                self.prediction = None;
            }
        }

        self.input = input;
    }

    /// Run the model for the current inputs
    ///
    /// Any earlier prediction is dropped first, so a failure leaves none.
    #[instrument(skip(self, service))]
    pub fn predict(&mut self, service: &dyn PremiumServiceTrait) -> Result<&PremiumPrediction, PremiumServiceError> {
        self.prediction = None;
        let profile = self.input.to_profile();
        let prediction = service.predict_premium(&profile)?;
        info!("Premium predicted: {:.0}", prediction.premium);
        Ok(self.prediction.insert(prediction))
    }

    /// Restore the default widget values and drop any prediction
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// One full interaction: apply inputs, predict if triggered, derive the view
    ///
    /// On a failed prediction the session keeps the new inputs and no
    /// prediction.
    pub fn interact(
        &mut self,
        input: ProfileInput,
        action: FormAction,
        service: &dyn PremiumServiceTrait,
    ) -> Result<SessionView, PremiumServiceError> {
        self.apply_input(input);
        if action == FormAction::Predict {
            self.predict(service)?;
        }
        Ok(self.view(service))
    }

    /// Derive everything the page shows from the current state
    pub fn view(&self, service: &dyn PremiumServiceTrait) -> SessionView {
        let profile = self.input.to_profile();
        let bmi_category = categorize_bmi(profile.bmi);
        let suggestion = health_suggestion(bmi_category, profile.age, profile.sex);
        let average_premium = service.average_premium();

        // Without a positive average there is nothing to compare against
        let comparable = average_premium.is_finite() && average_premium > 0.0;
        let compared = self.prediction.as_ref().filter(|_| comparable);

        let comparison = compared.map(|prediction| compare_premium(prediction.premium, average_premium));
        let insights = build_insight_panel(
            &profile,
            compared.map(|prediction| (prediction.premium, average_premium)),
        );

        SessionView {
            input: self.input,
            profile,
            bmi_category,
            health_suggestion: suggestion.to_string(),
            average_premium,
            prediction: self.prediction.clone(),
            comparison,
            insights,
        }
    }
}

/// Stateless estimate: a fresh session, the given inputs, and a prediction
pub fn estimate(
    input: ProfileInput,
    service: &dyn PremiumServiceTrait,
) -> Result<SessionView, PremiumServiceError> {
    service.validate_input(&input)?;
    let mut session = FormSession::new();
    session.interact(input, FormAction::Predict, service)
}
