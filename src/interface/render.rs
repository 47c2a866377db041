use crate::models::{NutritionCalculation, PhaseData};
use crate::planner::{ProgramPlan, ScaledSchema};

/// Display calorie and macro targets.
pub fn display_calculation(calc: &NutritionCalculation) {
    println!();
    println!("=== Energy Budget ===");
    println!();
    println!("Base energy:  {:>5} kcal", calc.base_kcal);
    println!("Target:       {:>5} kcal", calc.kcal);
    println!("Protein:      {:>5} g", calc.protein_g);
    println!("Fat:          {:>5} g", calc.fat_g);
    println!("Carbs:        {:>5} g", calc.carbs_g);

    let macro_kcal = calc.macro_kcal();
    if macro_kcal != calc.kcal {
        println!("(macros add up to {} kcal)", macro_kcal);
    }
    println!();
}

/// Display one phase as a compact block.
pub fn display_phase(phase: &PhaseData) {
    let t = phase.targets();

    println!(
        "Phase {} - {} ({:.1} kg, x{})",
        phase.phase_number(),
        phase.name(),
        t.weight_kg,
        t.activity_multiplier
    );
    println!(
        "  {} kcal | P {} g  F {} g  C {} g",
        t.calories, t.protein_g, t.fat_g, t.carbs_g
    );
    println!("  Steps: {}", t.steps);

    if let Some(cardio) = phase.cardio() {
        match cardio.minutes {
            Some(min) => println!("  Cardio: {} min - {}", min, cardio.description),
            None => println!("  Cardio: {}", cardio.description),
        }
    }
}

/// Display all four phases of a program.
pub fn display_program(plan: &ProgramPlan) {
    println!();
    println!("=== Program ===");
    println!();

    for phase in plan.phases() {
        display_phase(phase);
        println!();
    }

    let steps = plan.step_progression();
    println!("--- Summary ---");
    println!(
        "Steps: {}",
        steps
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    println!();
}

/// Display a scaled meal schema in a formatted table.
pub fn display_schema(scaled: &ScaledSchema) {
    let schema = &scaled.schema;

    println!();
    println!("=== Meal Schema ({:.0} kcal) ===", scaled.target_kcal);

    // Find max item name length for alignment
    let max_name_len = schema
        .items()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(10);

    for meal in &schema.meals {
        println!();
        println!("{}", meal.name);

        for item in &meal.items {
            println!(
                "  {:<width$} {:>7.1} g | P {:>5.1}  F {:>5.1}  C {:>5.1} | {:>6.1} kcal",
                item.name,
                item.amount_g,
                item.protein_g,
                item.fat_g,
                item.carbs_g,
                item.kcal,
                width = max_name_len
            );
        }

        let sub = meal.totals();
        println!(
            "  {:<width$}           P {:>5.1}  F {:>5.1}  C {:>5.1} | {:>6.1} kcal",
            "",
            sub.protein_g,
            sub.fat_g,
            sub.carbs_g,
            sub.kcal,
            width = max_name_len
        );
    }

    let totals = &scaled.totals;
    println!();
    println!("--- Summary ---");
    println!("Scaling factor: {:.4}", scaled.scaling_factor);
    println!(
        "Totals: {:.1} kcal | P {:.1} g  F {:.1} g  C {:.1} g",
        totals.kcal, totals.protein_g, totals.fat_g, totals.carbs_g
    );
    println!(
        "Deviation from target: {:.2}%",
        scaled.kcal_deviation() * 100.0
    );
    println!();
}
