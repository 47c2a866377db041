use std::path::Path;

use crate::error::Result;
use crate::models::NutritionSchema;
use crate::planner::ProgramPlan;

/// Write one CSV row per program phase.
pub fn write_program_csv(plan: &ProgramPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "phase",
        "name",
        "weight_kg",
        "activity_multiplier",
        "steps",
        "calories",
        "protein_g",
        "fat_g",
        "carbs_g",
        "cardio_minutes",
        "cardio_description",
    ])?;

    for phase in plan.phases() {
        let t = phase.targets();
        let cardio = phase.cardio();
        wtr.write_record([
            phase.phase_number().to_string(),
            phase.name().to_string(),
            format!("{:.1}", t.weight_kg),
            t.activity_multiplier.to_string(),
            t.steps.to_string(),
            t.calories.to_string(),
            t.protein_g.to_string(),
            t.fat_g.to_string(),
            t.carbs_g.to_string(),
            cardio
                .and_then(|c| c.minutes)
                .map(|m| m.to_string())
                .unwrap_or_default(),
            cardio.map(|c| c.description.clone()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write one CSV row per meal item.
pub fn write_schema_csv(schema: &NutritionSchema, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "item", "amount_g", "protein_g", "fat_g", "carbs_g", "kcal"])?;

    for meal in &schema.meals {
        for item in &meal.items {
            wtr.write_record([
                meal.name.clone(),
                item.name.clone(),
                format!("{:.1}", item.amount_g),
                format!("{:.1}", item.protein_g),
                format!("{:.1}", item.fat_g),
                format!("{:.1}", item.carbs_g),
                format!("{:.1}", item.kcal),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityMultiplier, CardioOption};
    use crate::planner::{default_template, plan_program, MaintenanceCheckIn, PhaseCheckIn, ProgramInput};
    use tempfile::NamedTempFile;

    fn check_in(weight_kg: f64) -> PhaseCheckIn {
        PhaseCheckIn {
            weight_kg,
            activity_multiplier: ActivityMultiplier::Moderate,
            deficit_kcal: 400.0,
        }
    }

    #[test]
    fn test_program_csv() {
        let plan = plan_program(&ProgramInput {
            initial_steps: 8000,
            base: check_in(80.0),
            ramp_up_1: check_in(78.0),
            ramp_up_2: check_in(77.0),
            maintenance: MaintenanceCheckIn {
                weight_kg: 76.0,
                activity_multiplier: ActivityMultiplier::Moderate,
                activity_adjustment: 0,
                cardio_option: CardioOption::StepsOnly,
            },
            carb_policy: Default::default(),
        })
        .unwrap();

        let file = NamedTempFile::new().unwrap();
        write_program_csv(&plan, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][9], "");
        assert_eq!(&rows[1][4], "10000");
        assert_eq!(&rows[1][9], "10");
        assert_eq!(&rows[3][4], "12500");
        assert_eq!(&rows[3][9], "");
    }

    #[test]
    fn test_schema_csv() {
        let template = default_template();
        let file = NamedTempFile::new().unwrap();
        write_schema_csv(&template, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), template.item_count());
        assert_eq!(&rows[0][0], "Måltid 1");
        assert_eq!(&rows[0][1], "Havregryn");
        assert_eq!(&rows[0][2], "50.0");
    }
}
