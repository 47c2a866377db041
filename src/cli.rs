use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::ActivityMultiplier;
use crate::planner::CarbPolicy;

/// PhaseNutrition — calorie, macro, step and meal-schema targets for a four-phase program.
#[derive(Parser, Debug)]
#[command(name = "phase_nutrition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// What to do when protein and fat leave no room for carbohydrates.
    #[arg(long, value_enum, default_value_t = CarbPolicyArg::Reject, global = true)]
    pub carb_policy: CarbPolicyArg,

    /// Print results as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit log lines as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate calorie and macro targets (prompts for anything missing).
    Budget {
        /// Bodyweight in kg.
        #[arg(short, long)]
        weight: Option<f64>,

        /// Activity multiplier: 25, 30, 35 or 40 kcal/kg.
        #[arg(short, long, value_parser = parse_activity)]
        activity: Option<ActivityMultiplier>,

        /// Daily calorie deficit.
        #[arg(short, long)]
        deficit: Option<f64>,
    },

    /// Lay out all four phases from a JSON file of check-ins.
    Program {
        /// Path to the program input JSON file.
        input: PathBuf,

        /// Also write the phases to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Walk through the four phases interactively.
    Wizard {
        /// Also write the phases to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Scale a meal schema to a calorie target.
    Scale {
        /// Target kcal. Without it the target is calculated from weight/activity/deficit.
        #[arg(short, long)]
        kcal: Option<f64>,

        /// Bodyweight in kg.
        #[arg(short, long)]
        weight: Option<f64>,

        /// Activity multiplier: 25, 30, 35 or 40 kcal/kg.
        #[arg(short, long, value_parser = parse_activity)]
        activity: Option<ActivityMultiplier>,

        /// Daily calorie deficit.
        #[arg(short, long)]
        deficit: Option<f64>,

        /// Template JSON file (defaults to the built-in reference schema).
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Write the scaled schema to a JSON file.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the scaled schema to a CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Print or save the built-in reference meal schema.
    Template {
        /// Write the template to a JSON file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Budget {
            weight: None,
            activity: None,
            deficit: None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarbPolicyArg {
    /// Fail when the carbohydrate target would be negative.
    Reject,
    /// Report zero carbohydrates instead.
    Clamp,
}

impl From<CarbPolicyArg> for CarbPolicy {
    fn from(arg: CarbPolicyArg) -> Self {
        match arg {
            CarbPolicyArg::Reject => CarbPolicy::Reject,
            CarbPolicyArg::Clamp => CarbPolicy::ClampToZero,
        }
    }
}

fn parse_activity(s: &str) -> Result<ActivityMultiplier, String> {
    let value: i32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    ActivityMultiplier::try_from(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_args() {
        let cli = Cli::try_parse_from([
            "phase_nutrition",
            "budget",
            "-w",
            "80",
            "-a",
            "35",
            "-d",
            "500",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Budget {
                weight,
                activity,
                deficit,
            }) => {
                assert_eq!(weight, Some(80.0));
                assert_eq!(activity, Some(ActivityMultiplier::Moderate));
                assert_eq!(deficit, Some(500.0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.carb_policy, CarbPolicyArg::Reject);
    }

    #[test]
    fn test_rejects_unknown_activity() {
        let result = Cli::try_parse_from(["phase_nutrition", "budget", "-a", "33"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "phase_nutrition",
            "scale",
            "--kcal",
            "3000",
            "--carb-policy",
            "clamp",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(CarbPolicy::from(cli.carb_policy), CarbPolicy::ClampToZero);
    }
}
