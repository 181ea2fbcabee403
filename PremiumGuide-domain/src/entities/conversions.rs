use premium_guide_data::models::FeatureVector;

use crate::entities::profile::UserProfile;

/// Conversion functions between domain entities and data models
/// These functions follow the pattern convert_to_[target_layer]_[model_name]

/// Convert a profile into the ordered feature vector the model expects
///
/// Order: age, sex (Male = 1), bmi, children, smoker (Yes = 1)
pub fn convert_to_data_features(profile: &UserProfile) -> FeatureVector {
    [
        f64::from(profile.age),
        profile.sex.as_feature(),
        profile.bmi,
        f64::from(profile.children),
        profile.smoker.as_feature(),
    ]
}
