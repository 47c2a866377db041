use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{NutritionError, Result};
use crate::models::{ActivityMultiplier, NutritionCalculation};
use crate::planner::constants::*;

/// What to do when protein and fat leave no room for carbohydrates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbPolicy {
    /// Fail with [`NutritionError::ArithmeticAnomaly`].
    #[default]
    Reject,
    /// Report zero carbohydrates and keep the calorie target as computed.
    ClampToZero,
}

/// Check that a bodyweight is usable.
pub fn validate_weight(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "weight must be a positive number of kg (got {})",
            weight_kg
        )));
    }
    Ok(())
}

/// Check that a deficit is usable.
pub fn validate_deficit(deficit_kcal: f64) -> Result<()> {
    if !deficit_kcal.is_finite() || deficit_kcal < 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "deficit must be zero or a positive number of kcal (got {})",
            deficit_kcal
        )));
    }
    Ok(())
}

/// Calorie and macro targets for a bodyweight, activity level and deficit.
///
/// Protein and fat are fixed per kg of bodyweight; carbohydrates take whatever
/// energy is left. A negative carbohydrate budget is rejected.
pub fn calculate(
    weight_kg: f64,
    activity: ActivityMultiplier,
    deficit_kcal: f64,
) -> Result<NutritionCalculation> {
    calculate_with_policy(weight_kg, activity, deficit_kcal, CarbPolicy::Reject)
}

/// [`calculate`] with an explicit negative-carbohydrate policy.
pub fn calculate_with_policy(
    weight_kg: f64,
    activity: ActivityMultiplier,
    deficit_kcal: f64,
    policy: CarbPolicy,
) -> Result<NutritionCalculation> {
    validate_weight(weight_kg)?;
    validate_deficit(deficit_kcal)?;

    let base_kcal = weight_kg * activity.kcal_per_kg();
    let adjusted_kcal = if deficit_kcal > 0.0 {
        base_kcal - deficit_kcal
    } else {
        base_kcal
    };

    let protein_g = (weight_kg * PROTEIN_G_PER_KG).round();
    let fat_g = (weight_kg * FAT_G_PER_KG).round();

    let remaining_kcal = adjusted_kcal - protein_g * KCAL_PER_G_PROTEIN - fat_g * KCAL_PER_G_FAT;
    let mut carbs_g = (remaining_kcal / KCAL_PER_G_CARBS).round() as i64;

    if carbs_g < 0 {
        match policy {
            CarbPolicy::Reject => {
                return Err(NutritionError::ArithmeticAnomaly {
                    remaining_kcal,
                    carbs_g,
                });
            }
            CarbPolicy::ClampToZero => {
                warn!(
                    weight_kg,
                    activity = activity.value(),
                    deficit_kcal,
                    carbs_g,
                    "Carbohydrate target clamped to zero"
                );
                carbs_g = 0;
            }
        }
    }

    let result = NutritionCalculation {
        kcal: adjusted_kcal.round() as i64,
        protein_g: protein_g as i64,
        fat_g: fat_g as i64,
        carbs_g,
        base_kcal: base_kcal.round() as i64,
    };

    debug!(
        weight_kg,
        activity = activity.value(),
        deficit_kcal,
        kcal = result.kcal,
        protein_g = result.protein_g,
        fat_g = result.fat_g,
        carbs_g = result.carbs_g,
        "Energy budget calculated"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_reference_budget() {
        // 80 kg, moderate activity, 500 kcal deficit
        let calc = calculate(80.0, ActivityMultiplier::Moderate, 500.0).unwrap();
        assert_eq!(calc.base_kcal, 2800);
        assert_eq!(calc.kcal, 2300);
        assert_eq!(calc.protein_g, 200);
        assert_eq!(calc.fat_g, 56);
        assert_eq!(calc.carbs_g, 249); // (2300 - 800 - 504) / 4 = 249
    }

    #[test]
    fn test_zero_deficit_keeps_base() {
        let calc = calculate(70.0, ActivityMultiplier::Light, 0.0).unwrap();
        assert_eq!(calc.base_kcal, 2100);
        assert_eq!(calc.kcal, 2100);
    }

    #[test]
    fn test_idempotent() {
        let a = calculate(72.4, ActivityMultiplier::VeryActive, 350.0).unwrap();
        let b = calculate(72.4, ActivityMultiplier::VeryActive, 350.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_bad_weight() {
        for weight in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                calculate(weight, ActivityMultiplier::Moderate, 0.0),
                Err(NutritionError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_deficit() {
        assert!(matches!(
            calculate(80.0, ActivityMultiplier::Moderate, -100.0),
            Err(NutritionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_carbs_rejected() {
        // 40 kg sedentary with a 1000 kcal deficit leaves nothing for carbs
        let err = calculate(40.0, ActivityMultiplier::Sedentary, 1000.0).unwrap_err();
        match err {
            NutritionError::ArithmeticAnomaly { carbs_g, .. } => assert!(carbs_g < 0),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_carbs_clamped() {
        let calc = calculate_with_policy(
            40.0,
            ActivityMultiplier::Sedentary,
            1000.0,
            CarbPolicy::ClampToZero,
        )
        .unwrap();
        assert_eq!(calc.carbs_g, 0);
        assert_eq!(calc.kcal, 0);
        assert_eq!(calc.protein_g, 100);
        assert_eq!(calc.fat_g, 28);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: macros add back up to the calorie target within 2 kcal
        #[test]
        fn prop_macro_kcal_identity(
            weight in 40.0f64..=200.0,
            idx in 0usize..4,
            deficit in 0.0f64..=1000.0,
        ) {
            let activity = ActivityMultiplier::ALL[idx];
            let result = calculate(weight, activity, deficit);
            prop_assume!(!matches!(result, Err(NutritionError::ArithmeticAnomaly { .. })));

            let calc = result.unwrap();
            prop_assert!((calc.macro_kcal() - calc.kcal).abs() <= 2,
                "macros {} vs kcal {}", calc.macro_kcal(), calc.kcal);
        }

        #[test]
        fn prop_deficit_lowers_kcal(weight in 40.0f64..200.0, deficit in 1.0f64..1000.0) {
            let activity = ActivityMultiplier::VeryActive;
            let with = calculate_with_policy(weight, activity, deficit, CarbPolicy::ClampToZero).unwrap();
            let without = calculate(weight, activity, 0.0).unwrap();
            prop_assert!(with.kcal <= without.kcal);
            prop_assert_eq!(with.base_kcal, without.base_kcal);
        }
    }
}
