use crate::entities::insights::{InputEchoRow, InsightPanel};
use crate::entities::premium::{
    ComparisonTier, Currency, DatasetComparison, MessageLevel, PremiumComparison,
};
use crate::entities::profile::{format_bmi, BmiCategory, Sex, Smoker, UserProfile};

/// Categorize a BMI value
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi <= 24.9 {
        BmiCategory::Normal
    } else if bmi <= 29.9 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Canned health suggestion for a category, age and sex
///
/// Underweight splits at age 40, Overweight and Obese at 50. Normal
/// splits on sex only and ignores age.
pub fn health_suggestion(category: BmiCategory, age: u32, sex: Sex) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            if age < 40 {
                "Eat nutrient-rich high-calorie meals, include proteins and healthy fats. Strength training can help build muscle."
            } else {
                "Focus on nutrient-dense meals, protein supplements, and regular checkups to prevent malnutrition."
            }
        }
        BmiCategory::Normal => match sex {
            Sex::Male => "Maintain current lifestyle, stay active with cardio and strength exercises.",
            Sex::Female => "Maintain balanced diet, stay active, include flexibility exercises and moderate strength training.",
        },
        BmiCategory::Overweight => {
            if age < 50 {
                "Reduce calorie intake, avoid processed foods, exercise regularly (cardio + strength), monitor weight weekly."
            } else {
                "Follow low-calorie nutrient-rich diet, increase walking and light exercises, consult dietitian if needed."
            }
        }
        BmiCategory::Obese => {
            if age < 50 {
                "Adopt structured weight-loss plan, monitor diet, include regular exercise, consult doctor/dietitian."
            } else {
                "Medical supervision recommended, adopt diet & light exercise, manage chronic risks, consult healthcare provider."
            }
        }
    }
}

/// Side-panel advisory for smoker status
pub fn smoker_insight(smoker: Smoker) -> &'static str {
    match smoker {
        Smoker::Yes => "Smoking increases premium by ~60-70% on average.",
        Smoker::No => "Non-smokers generally pay lower premiums.",
    }
}

/// Side-panel advisory for a BMI category
pub fn bmi_insight(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Being underweight may increase health risks, depending on age and gender."
        }
        BmiCategory::Normal => {
            "BMI is in the normal range; helps keep premiums lower. Interpretation may slightly vary with age/gender."
        }
        BmiCategory::Overweight => {
            "Higher BMI increases health risk and insurance premium. Risk effect may vary with age and gender."
        }
        BmiCategory::Obese => {
            "Obesity significantly increases health risk and insurance premium, especially for older adults and men."
        }
    }
}

/// Signed percentage difference of `premium` from `average`
pub fn diff_percent(premium: f64, average: f64) -> f64 {
    (premium - average) / average * 100.0
}

/// Colour tier of `premium` against `average`
pub fn comparison_tier(premium: f64, average: f64) -> ComparisonTier {
    if premium < average * 0.95 {
        ComparisonTier::Favorable
    } else if premium <= average * 1.05 {
        ComparisonTier::Neutral
    } else {
        ComparisonTier::Unfavorable
    }
}

/// Display text for a signed difference, e.g. "3.8% higher" or "5.0% lower"
pub fn describe_difference(diff: f64) -> String {
    if diff >= 0.0 {
        format!("{:.1}% higher", diff)
    } else {
        format!("{:.1}% lower", diff.abs())
    }
}

/// Compare a premium with the dataset average
pub fn compare_premium(premium: f64, average_premium: f64) -> PremiumComparison {
    let diff = diff_percent(premium, average_premium);
    PremiumComparison {
        premium,
        average_premium,
        diff_percent: diff,
        tier: comparison_tier(premium, average_premium),
        summary: describe_difference(diff),
    }
}

/// Side-panel sentence placing the premium above or below the dataset average
pub fn dataset_comparison(premium: f64, average_premium: f64) -> DatasetComparison {
    if premium > average_premium {
        DatasetComparison {
            level: MessageLevel::Warning,
            message: format!(
                "Your premium is higher than the dataset average of {}.",
                Currency(average_premium)
            ),
        }
    } else {
        DatasetComparison {
            level: MessageLevel::Success,
            message: format!(
                "Your premium is lower than the dataset average of {}.",
                Currency(average_premium)
            ),
        }
    }
}

/// Current inputs as a two-column table
pub fn input_echo(profile: &UserProfile, category: BmiCategory) -> Vec<InputEchoRow> {
    let row = |feature: &str, value: String| InputEchoRow {
        feature: feature.to_string(),
        value,
    };

    vec![
        row("Age", profile.age.to_string()),
        row("Sex", profile.sex.to_string()),
        row("Children", profile.children.to_string()),
        row("Smoker", profile.smoker.to_string()),
        row("BMI", format_bmi(profile.bmi)),
        row("BMI Category", category.to_string()),
    ]
}

/// Assemble the side panel for a profile
///
/// `premium` is `Some((premium, average))` once a prediction exists.
pub fn build_insight_panel(profile: &UserProfile, premium: Option<(f64, f64)>) -> InsightPanel {
    let category = categorize_bmi(profile.bmi);

    InsightPanel {
        input_echo: input_echo(profile, category),
        smoker_insight: smoker_insight(profile.smoker).to_string(),
        bmi_insight: bmi_insight(category).to_string(),
        dataset_comparison: premium.map(|(premium, average)| dataset_comparison(premium, average)),
        suggestion: health_suggestion(category, profile.age, profile.sex).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32, sex: Sex, bmi: f64, smoker: Smoker) -> UserProfile {
        UserProfile {
            age,
            sex,
            children: 0,
            smoker,
            bmi,
        }
    }

    #[test]
    fn test_bmi_category_underweight() {
        for bmi in [10.0, 15.0, 18.0, 18.49] {
            assert_eq!(categorize_bmi(bmi), BmiCategory::Underweight, "bmi {}", bmi);
        }
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(categorize_bmi(18.5), BmiCategory::Normal);
        assert_eq!(categorize_bmi(24.9), BmiCategory::Normal);
        assert_eq!(categorize_bmi(24.90001), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(categorize_bmi(29.90001), BmiCategory::Obese);
        assert_eq!(categorize_bmi(60.0), BmiCategory::Obese);
    }

    #[test]
    fn test_underweight_suggestion_splits_at_forty() {
        let young = health_suggestion(BmiCategory::Underweight, 25, Sex::Female);
        let old = health_suggestion(BmiCategory::Underweight, 65, Sex::Female);
        assert_ne!(young, old);
        assert!(young.starts_with("Eat nutrient-rich high-calorie meals"));
        assert!(old.starts_with("Focus on nutrient-dense meals"));
        assert_eq!(health_suggestion(BmiCategory::Underweight, 39, Sex::Male), young);
        assert_eq!(health_suggestion(BmiCategory::Underweight, 40, Sex::Male), old);
    }

    #[test]
    fn test_normal_suggestion_depends_on_sex_only() {
        let male = health_suggestion(BmiCategory::Normal, 30, Sex::Male);
        let female = health_suggestion(BmiCategory::Normal, 30, Sex::Female);
        assert_ne!(male, female);
        for age in [0, 25, 49, 50, 80, 200] {
            assert_eq!(health_suggestion(BmiCategory::Normal, age, Sex::Male), male);
            assert_eq!(health_suggestion(BmiCategory::Normal, age, Sex::Female), female);
        }
    }

    #[test]
    fn test_overweight_and_obese_split_at_fifty() {
        for category in [BmiCategory::Overweight, BmiCategory::Obese] {
            let under = health_suggestion(category, 49, Sex::Male);
            let over = health_suggestion(category, 50, Sex::Male);
            assert_ne!(under, over);
            assert_eq!(health_suggestion(category, 49, Sex::Female), under);
        }
        assert!(health_suggestion(BmiCategory::Obese, 60, Sex::Male)
            .starts_with("Medical supervision recommended"));
    }

    #[test]
    fn test_all_eight_suggestions_are_distinct() {
        let mut texts = vec![
            health_suggestion(BmiCategory::Underweight, 20, Sex::Male),
            health_suggestion(BmiCategory::Underweight, 60, Sex::Male),
            health_suggestion(BmiCategory::Normal, 20, Sex::Male),
            health_suggestion(BmiCategory::Normal, 20, Sex::Female),
            health_suggestion(BmiCategory::Overweight, 20, Sex::Male),
            health_suggestion(BmiCategory::Overweight, 60, Sex::Male),
            health_suggestion(BmiCategory::Obese, 20, Sex::Male),
            health_suggestion(BmiCategory::Obese, 60, Sex::Male),
        ];
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), 8);
    }

    #[test]
    fn test_diff_percent_higher() {
        let diff = diff_percent(415000.0, 400000.0);
        assert!((diff - 3.75).abs() < 1e-9);
        assert!(describe_difference(diff).ends_with("% higher"));
    }

    #[test]
    fn test_diff_percent_lower() {
        let diff = diff_percent(380000.0, 400000.0);
        assert!((diff + 5.0).abs() < 1e-9);
        assert_eq!(describe_difference(diff), "5.0% lower");
    }

    #[test]
    fn test_equal_premium_reads_as_higher() {
        assert_eq!(describe_difference(diff_percent(400000.0, 400000.0)), "0.0% higher");
    }

    #[test]
    fn test_comparison_tiers() {
        assert_eq!(comparison_tier(300000.0, 400000.0), ComparisonTier::Favorable);
        assert_eq!(comparison_tier(400000.0, 400000.0), ComparisonTier::Neutral);
        assert_eq!(comparison_tier(415000.0, 400000.0), ComparisonTier::Neutral);
        assert_eq!(comparison_tier(385000.0, 400000.0), ComparisonTier::Neutral);
        assert_eq!(comparison_tier(430000.0, 400000.0), ComparisonTier::Unfavorable);
    }

    #[test]
    fn test_dataset_comparison_messages() {
        let above = dataset_comparison(500000.0, 400000.0);
        assert_eq!(above.level, MessageLevel::Warning);
        assert_eq!(above.message, "Your premium is higher than the dataset average of ₹400,000.");

        let below = dataset_comparison(300000.0, 400000.0);
        assert_eq!(below.level, MessageLevel::Success);
        assert!(below.message.contains("lower than the dataset average"));
    }

    #[test]
    fn test_insight_panel_without_prediction() {
        let panel = build_insight_panel(&profile(30, Sex::Male, 24.22, Smoker::Yes), None);
        assert_eq!(panel.input_echo.len(), 6);
        assert_eq!(panel.input_echo[4].value, "24.22");
        assert_eq!(panel.input_echo[5].value, "Normal");
        assert_eq!(panel.smoker_insight, "Smoking increases premium by ~60-70% on average.");
        assert!(panel.bmi_insight.starts_with("BMI is in the normal range"));
        assert!(panel.dataset_comparison.is_none());
        assert_eq!(
            panel.suggestion,
            health_suggestion(BmiCategory::Normal, 30, Sex::Male)
        );
    }

    #[test]
    fn test_insight_panel_with_prediction() {
        let panel = build_insight_panel(
            &profile(55, Sex::Female, 32.0, Smoker::No),
            Some((380000.0, 400000.0)),
        );
        assert_eq!(panel.smoker_insight, "Non-smokers generally pay lower premiums.");
        assert!(panel.bmi_insight.starts_with("Obesity significantly increases"));
        assert_eq!(
            panel.dataset_comparison.map(|c| c.level),
            Some(MessageLevel::Success)
        );
    }
}
