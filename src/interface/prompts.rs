use dialoguer::{Confirm, Input, Select};

use crate::error::{NutritionError, Result};
use crate::models::{ActivityMultiplier, CardioOption};

fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| NutritionError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for current bodyweight in kg.
pub fn prompt_weight() -> Result<f64> {
    let weight = prompt_number("Current bodyweight (kg)?", "80")?;
    if weight <= 0.0 {
        return Err(NutritionError::InvalidInput(
            "Weight must be greater than 0".to_string(),
        ));
    }
    Ok(weight)
}

/// Prompt for a daily calorie deficit.
pub fn prompt_deficit() -> Result<f64> {
    let deficit = prompt_number("Daily calorie deficit (kcal, 0 for none)?", "500")?;
    if deficit < 0.0 {
        return Err(NutritionError::InvalidInput(
            "Deficit must be >= 0".to_string(),
        ));
    }
    Ok(deficit)
}

/// Prompt for current average daily steps.
pub fn prompt_steps() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Average daily steps?")
        .default("8000".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput("Invalid step count".to_string()))
}

/// Prompt for an activity level.
pub fn prompt_activity() -> Result<ActivityMultiplier> {
    let options: Vec<String> = ActivityMultiplier::ALL
        .iter()
        .map(|a| format!("{} kcal/kg ({})", a.value(), a.label()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2) // moderate
        .interact()?;

    Ok(ActivityMultiplier::ALL[selection])
}

/// Prompt for the maintenance cardio strategy.
pub fn prompt_cardio_option() -> Result<CardioOption> {
    let options = [
        "1: fewer steps + 12 min intervals",
        "2: keep steps, no cardio",
    ];

    let selection = Select::new()
        .with_prompt("Maintenance cardio option")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => CardioOption::ReducedStepsWithCardio,
        _ => CardioOption::StepsOnly,
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Fill in any budget input not given on the command line.
pub fn collect_budget_inputs(
    weight: Option<f64>,
    activity: Option<ActivityMultiplier>,
    deficit: Option<f64>,
) -> Result<(f64, ActivityMultiplier, f64)> {
    let weight = match weight {
        Some(w) => w,
        None => prompt_weight()?,
    };
    let activity = match activity {
        Some(a) => a,
        None => prompt_activity()?,
    };
    let deficit = match deficit {
        Some(d) => d,
        None => prompt_deficit()?,
    };

    Ok((weight, activity, deficit))
}
