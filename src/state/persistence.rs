use std::fs;
use std::path::Path;

use serde_json::error::Category;

use crate::error::{NutritionError, Result};
use crate::models::NutritionSchema;
use crate::planner::{validate_template, ProgramInput};

/// Load a meal schema from a JSON file.
///
/// The schema is checked as a scaling template before it is returned.
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<NutritionSchema> {
    let content = fs::read_to_string(path)?;
    let schema: NutritionSchema = serde_json::from_str(&content)?;
    validate_template(&schema)?;
    Ok(schema)
}

/// Save a meal schema to a JSON file.
pub fn save_schema<P: AsRef<Path>>(path: P, schema: &NutritionSchema) -> Result<()> {
    let json = serde_json::to_string_pretty(schema)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load program check-ins from a JSON file.
///
/// Well-formed JSON with bad check-in values (an off-scale multiplier, a
/// cardio option other than 1 or 2, a missing field) is an
/// `InvalidPhaseInput`; unreadable or malformed files stay `Io`/`Json`.
pub fn load_program_input<P: AsRef<Path>>(path: P) -> Result<ProgramInput> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| match e.classify() {
        Category::Data => NutritionError::InvalidPhaseInput(e.to_string()),
        _ => NutritionError::Json(e),
    })
}
