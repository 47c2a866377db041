use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};

/// Discrete kcal-per-kg factor standing in for activity-adjusted expenditure.
///
/// Serialized as the bare number (25, 30, 35 or 40).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ActivityMultiplier {
    Sedentary = 25,
    Light = 30,
    Moderate = 35,
    VeryActive = 40,
}

impl ActivityMultiplier {
    pub const ALL: [ActivityMultiplier; 4] = [
        ActivityMultiplier::Sedentary,
        ActivityMultiplier::Light,
        ActivityMultiplier::Moderate,
        ActivityMultiplier::VeryActive,
    ];

    /// The multiplier as an integer (25, 30, 35, 40).
    pub fn value(self) -> i32 {
        self as i32
    }

    /// The multiplier as kcal per kg of bodyweight.
    pub fn kcal_per_kg(self) -> f64 {
        f64::from(self.value())
    }

    /// Shift the multiplier by a signed delta; the result must land on another level.
    pub fn checked_adjust(self, delta: i32) -> Option<ActivityMultiplier> {
        self.value()
            .checked_add(delta)
            .and_then(|v| ActivityMultiplier::try_from(v).ok())
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityMultiplier::Sedentary => "sedentary",
            ActivityMultiplier::Light => "light",
            ActivityMultiplier::Moderate => "moderate",
            ActivityMultiplier::VeryActive => "very active",
        }
    }
}

impl TryFrom<i32> for ActivityMultiplier {
    type Error = NutritionError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            25 => Ok(ActivityMultiplier::Sedentary),
            30 => Ok(ActivityMultiplier::Light),
            35 => Ok(ActivityMultiplier::Moderate),
            40 => Ok(ActivityMultiplier::VeryActive),
            other => Err(NutritionError::InvalidInput(format!(
                "activity multiplier must be one of 25, 30, 35, 40 (got {})",
                other
            ))),
        }
    }
}

impl From<ActivityMultiplier> for i32 {
    fn from(value: ActivityMultiplier) -> Self {
        value.value()
    }
}

impl std::fmt::Display for ActivityMultiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Daily calorie and macronutrient targets.
///
/// `protein_g * 4 + fat_g * 9 + carbs_g * 4` matches `kcal` up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionCalculation {
    pub kcal: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
    /// Energy estimate before the deficit was applied.
    pub base_kcal: i64,
}

impl NutritionCalculation {
    /// Energy implied by the macro split (4/9/4 kcal per gram).
    pub fn macro_kcal(&self) -> i64 {
        self.protein_g * 4 + self.fat_g * 9 + self.carbs_g * 4
    }
}

/// Calorie figure a meal schema is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetNutrition {
    pub kcal: f64,
}

impl TargetNutrition {
    pub fn new(kcal: f64) -> Self {
        Self { kcal }
    }
}

impl From<&NutritionCalculation> for TargetNutrition {
    fn from(calc: &NutritionCalculation) -> Self {
        Self {
            kcal: calc.kcal as f64,
        }
    }
}
