use serde::Serialize;
use tracing::debug;

use crate::error::{NutritionError, Result};
use crate::models::{Meal, MealItem, NutritionSchema, TargetNutrition, Totals};
use crate::planner::constants::{round_to, SCHEMA_DECIMALS};

/// A scaled schema together with the figures used to produce it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledSchema {
    pub schema: NutritionSchema,
    pub scaling_factor: f64,
    pub target_kcal: f64,
    pub totals: Totals,
}

impl ScaledSchema {
    /// Relative gap between the summed kcal and the target.
    pub fn kcal_deviation(&self) -> f64 {
        (self.totals.kcal - self.target_kcal).abs() / self.target_kcal
    }
}

/// Scale every item of `original` so the schema lands near `target.kcal`.
///
/// The template is left untouched; a new schema is returned.
pub fn generate_adjusted_schema(
    original: &NutritionSchema,
    target: &TargetNutrition,
) -> Result<NutritionSchema> {
    scale_schema(original, target).map(|scaled| scaled.schema)
}

/// Like [`generate_adjusted_schema`], keeping the factor and recomputed totals.
pub fn scale_schema(original: &NutritionSchema, target: &TargetNutrition) -> Result<ScaledSchema> {
    validate_template(original)?;
    if !target.kcal.is_finite() || target.kcal <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "target kcal must be positive (got {})",
            target.kcal
        )));
    }

    let scaling_factor = target.kcal / original.totals().kcal;

    let meals = original
        .meals
        .iter()
        .map(|meal| Meal {
            name: meal.name.clone(),
            items: meal
                .items
                .iter()
                .map(|item| scale_item(item, scaling_factor))
                .collect(),
        })
        .collect();

    let schema = NutritionSchema::new(meals);
    let totals = schema.totals();

    debug!(
        target_kcal = target.kcal,
        scaling_factor,
        scaled_kcal = totals.kcal,
        items = schema.item_count(),
        "Meal schema scaled"
    );

    Ok(ScaledSchema {
        schema,
        scaling_factor,
        target_kcal: target.kcal,
        totals,
    })
}

/// Reject templates the scaler cannot divide by.
pub fn validate_template(schema: &NutritionSchema) -> Result<()> {
    if schema.meals.is_empty() || schema.item_count() == 0 {
        return Err(NutritionError::InvalidTemplate(
            "schema has no meal items".to_string(),
        ));
    }

    if let Some(item) = schema
        .items()
        .find(|i| !i.amount_g.is_finite() || i.amount_g <= 0.0)
    {
        return Err(NutritionError::InvalidTemplate(format!(
            "item '{}' has a non-positive amount ({} g)",
            item.name, item.amount_g
        )));
    }

    let total_kcal = schema.totals().kcal;
    if !total_kcal.is_finite() || total_kcal <= 0.0 {
        return Err(NutritionError::InvalidTemplate(format!(
            "schema totals {} kcal",
            total_kcal
        )));
    }

    Ok(())
}

// Nutrients follow the rounded amount, not the raw factor, so reported
// macros stay proportional to the grams shown.
fn scale_item(item: &MealItem, scaling_factor: f64) -> MealItem {
    let amount_g = round_to(item.amount_g * scaling_factor, SCHEMA_DECIMALS);
    let amount_ratio = amount_g / item.amount_g;

    MealItem {
        name: item.name.clone(),
        amount_g,
        protein_g: round_to(item.protein_g * amount_ratio, SCHEMA_DECIMALS),
        fat_g: round_to(item.fat_g * amount_ratio, SCHEMA_DECIMALS),
        carbs_g: round_to(item.carbs_g * amount_ratio, SCHEMA_DECIMALS),
        kcal: round_to(item.kcal * amount_ratio, SCHEMA_DECIMALS),
    }
}
