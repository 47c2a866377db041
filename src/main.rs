use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use phase_nutrition_rs::cli::{Cli, Command};
use phase_nutrition_rs::error::Result;
use phase_nutrition_rs::interface::{
    collect_budget_inputs, display_calculation, display_phase, display_program, display_schema,
    prompt_activity, prompt_cardio_option, prompt_deficit, prompt_steps, prompt_weight,
    prompt_yes_no,
};
use phase_nutrition_rs::models::{ActivityMultiplier, TargetNutrition};
use phase_nutrition_rs::planner::{
    calculate_with_policy, default_template, plan_program, scale_schema, CarbPolicy, PhaseRules,
    ProgramPlan,
};
use phase_nutrition_rs::state::{
    load_program_input, load_schema, save_schema, write_program_csv, write_schema_csv,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "phase_nutrition_rs=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let policy = CarbPolicy::from(cli.carb_policy);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Budget {
            weight,
            activity,
            deficit,
        } => cmd_budget(weight, activity, deficit, policy, cli.json),
        Command::Program { input, csv } => cmd_program(&input, csv.as_deref(), cli.json),
        Command::Wizard { csv } => cmd_wizard(csv.as_deref(), policy, cli.json),
        Command::Scale {
            kcal,
            weight,
            activity,
            deficit,
            template,
            output,
            csv,
        } => {
            let target = match kcal {
                Some(kcal) => TargetNutrition::new(kcal),
                None => {
                    let (w, a, d) = collect_budget_inputs(weight, activity, deficit)?;
                    TargetNutrition::from(&calculate_with_policy(w, a, d, policy)?)
                }
            };
            cmd_scale(
                target,
                template.as_deref(),
                output.as_deref(),
                csv.as_deref(),
                cli.json,
            )
        }
        Command::Template { output } => cmd_template(output.as_deref()),
    }
}

/// Calculate and show a single energy budget.
fn cmd_budget(
    weight: Option<f64>,
    activity: Option<ActivityMultiplier>,
    deficit: Option<f64>,
    policy: CarbPolicy,
    json: bool,
) -> Result<()> {
    let (weight, activity, deficit) = collect_budget_inputs(weight, activity, deficit)?;
    let calc = calculate_with_policy(weight, activity, deficit, policy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&calc)?);
    } else {
        display_calculation(&calc);
    }
    Ok(())
}

/// Compute a whole program from a check-in file.
fn cmd_program(input_path: &Path, csv: Option<&Path>, json: bool) -> Result<()> {
    let input = load_program_input(input_path)?;
    info!(path = %input_path.display(), "Loaded program input");

    let plan = plan_program(&input)?;
    show_program(&plan, csv, json)
}

/// Prompt for each phase's check-in in turn.
fn cmd_wizard(csv: Option<&Path>, policy: CarbPolicy, json: bool) -> Result<()> {
    let rules = PhaseRules::default().with_carb_policy(policy);

    println!("Phase 1 - Base");
    let steps = prompt_steps()?;
    let base = rules.base_phase(prompt_weight()?, prompt_activity()?, prompt_deficit()?, steps)?;
    display_phase(&base);
    println!();

    println!("Phase 2 - Ramp-up 1");
    let ramp_up_1 = rules.ramp_up_1(
        base.steps(),
        prompt_weight()?,
        prompt_activity()?,
        prompt_deficit()?,
    )?;
    display_phase(&ramp_up_1);
    println!();

    println!("Phase 3 - Ramp-up 2");
    let ramp_up_2 = rules.ramp_up_2(
        ramp_up_1.steps(),
        prompt_weight()?,
        prompt_activity()?,
        prompt_deficit()?,
    )?;
    display_phase(&ramp_up_2);
    println!();

    println!("Phase 4 - Maintenance");
    let weight = prompt_weight()?;
    let base_activity = ramp_up_2.targets().activity_multiplier;
    let activity = if prompt_yes_no(
        &format!("Keep activity multiplier at {}?", base_activity),
        true,
    )? {
        base_activity
    } else {
        prompt_activity()?
    };
    let adjustment = activity.value() - base_activity.value();
    let maintenance = rules.maintenance(
        ramp_up_2.steps(),
        weight,
        base_activity,
        adjustment,
        prompt_cardio_option()?,
    )?;

    let plan = ProgramPlan {
        base,
        ramp_up_1,
        ramp_up_2,
        maintenance,
    };
    show_program(&plan, csv, json)
}

fn show_program(plan: &ProgramPlan, csv: Option<&Path>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        display_program(plan);
    }

    if let Some(path) = csv {
        write_program_csv(plan, path)?;
        info!(path = %path.display(), "Wrote program CSV");
    }
    Ok(())
}

/// Scale the reference (or a supplied) template to a calorie target.
fn cmd_scale(
    target: TargetNutrition,
    template: Option<&Path>,
    output: Option<&Path>,
    csv: Option<&Path>,
    json: bool,
) -> Result<()> {
    let original = match template {
        Some(path) => load_schema(path)?,
        None => default_template(),
    };

    let scaled = scale_schema(&original, &target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&scaled)?);
    } else {
        display_schema(&scaled);
    }

    if let Some(path) = output {
        save_schema(path, &scaled.schema)?;
        info!(path = %path.display(), "Wrote scaled schema");
    }
    if let Some(path) = csv {
        write_schema_csv(&scaled.schema, path)?;
        info!(path = %path.display(), "Wrote scaled schema CSV");
    }
    Ok(())
}

/// Print the built-in template, or save it for editing.
fn cmd_template(output: Option<&Path>) -> Result<()> {
    let template = default_template();

    match output {
        Some(path) => {
            if path.exists() && !prompt_yes_no(&format!("Overwrite {}?", path.display()), false)? {
                return Ok(());
            }
            save_schema(path, &template)?;
            println!("Template saved to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&template)?),
    }
    Ok(())
}
