use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{ActivityMultiplier, CardioOption, PhaseData};
use crate::planner::energy::CarbPolicy;
use crate::planner::phases::PhaseRules;

/// Measurements taken at the start of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseCheckIn {
    pub weight_kg: f64,
    pub activity_multiplier: ActivityMultiplier,
    #[serde(default)]
    pub deficit_kcal: f64,
}

/// Measurements and choices for the maintenance phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceCheckIn {
    pub weight_kg: f64,
    pub activity_multiplier: ActivityMultiplier,
    #[serde(default)]
    pub activity_adjustment: i32,
    pub cardio_option: CardioOption,
}

/// Everything needed to lay out a full four-phase program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramInput {
    pub initial_steps: u32,
    pub base: PhaseCheckIn,
    pub ramp_up_1: PhaseCheckIn,
    pub ramp_up_2: PhaseCheckIn,
    pub maintenance: MaintenanceCheckIn,
    #[serde(default)]
    pub carb_policy: CarbPolicy,
}

/// The four computed phases of a program, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramPlan {
    pub base: PhaseData,
    pub ramp_up_1: PhaseData,
    pub ramp_up_2: PhaseData,
    pub maintenance: PhaseData,
}

impl ProgramPlan {
    pub fn phases(&self) -> [&PhaseData; 4] {
        [
            &self.base,
            &self.ramp_up_1,
            &self.ramp_up_2,
            &self.maintenance,
        ]
    }

    /// Daily step targets for phases 1 through 4.
    pub fn step_progression(&self) -> [u32; 4] {
        self.phases().map(|p| p.steps())
    }
}

/// Run the four phases in order, carrying each phase's steps into the next.
///
/// Every phase still uses its own check-in; nothing else is carried over.
pub fn plan_program(input: &ProgramInput) -> Result<ProgramPlan> {
    let rules = PhaseRules::default().with_carb_policy(input.carb_policy);

    let base = rules.base_phase(
        input.base.weight_kg,
        input.base.activity_multiplier,
        input.base.deficit_kcal,
        input.initial_steps,
    )?;
    let ramp_up_1 = rules.ramp_up_1(
        base.steps(),
        input.ramp_up_1.weight_kg,
        input.ramp_up_1.activity_multiplier,
        input.ramp_up_1.deficit_kcal,
    )?;
    let ramp_up_2 = rules.ramp_up_2(
        ramp_up_1.steps(),
        input.ramp_up_2.weight_kg,
        input.ramp_up_2.activity_multiplier,
        input.ramp_up_2.deficit_kcal,
    )?;
    let maintenance = rules.maintenance(
        ramp_up_2.steps(),
        input.maintenance.weight_kg,
        input.maintenance.activity_multiplier,
        input.maintenance.activity_adjustment,
        input.maintenance.cardio_option,
    )?;

    let plan = ProgramPlan {
        base,
        ramp_up_1,
        ramp_up_2,
        maintenance,
    };
    info!(steps = ?plan.step_progression(), "Program planned");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NutritionError;

    fn sample_input(cardio_option: CardioOption) -> ProgramInput {
        ProgramInput {
            initial_steps: 8000,
            base: PhaseCheckIn {
                weight_kg: 80.0,
                activity_multiplier: ActivityMultiplier::Moderate,
                deficit_kcal: 500.0,
            },
            ramp_up_1: PhaseCheckIn {
                weight_kg: 78.0,
                activity_multiplier: ActivityMultiplier::Moderate,
                deficit_kcal: 400.0,
            },
            ramp_up_2: PhaseCheckIn {
                weight_kg: 76.5,
                activity_multiplier: ActivityMultiplier::Moderate,
                deficit_kcal: 300.0,
            },
            maintenance: MaintenanceCheckIn {
                weight_kg: 75.0,
                activity_multiplier: ActivityMultiplier::Moderate,
                activity_adjustment: 0,
                cardio_option,
            },
            carb_policy: CarbPolicy::Reject,
        }
    }

    #[test]
    fn test_full_program() {
        let plan = plan_program(&sample_input(CardioOption::ReducedStepsWithCardio)).unwrap();
        assert_eq!(plan.step_progression(), [8000, 10000, 12500, 8750]);

        let numbers: Vec<u8> = plan.phases().iter().map(|p| p.phase_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(plan.ramp_up_1.targets().weight_kg, 78.0);
    }

    #[test]
    fn test_steps_only_program() {
        let plan = plan_program(&sample_input(CardioOption::StepsOnly)).unwrap();
        assert_eq!(plan.step_progression(), [8000, 10000, 12500, 12500]);
    }

    #[test]
    fn test_zero_initial_steps_fails_at_phase_two() {
        let mut input = sample_input(CardioOption::StepsOnly);
        input.initial_steps = 0;
        assert!(matches!(
            plan_program(&input),
            Err(NutritionError::InvalidPhaseInput(_))
        ));
    }

    #[test]
    fn test_input_from_json() {
        let json = r#"{
            "initial_steps": 7000,
            "base": {"weight_kg": 90, "activity_multiplier": 30, "deficit_kcal": 500},
            "ramp_up_1": {"weight_kg": 88, "activity_multiplier": 30, "deficit_kcal": 500},
            "ramp_up_2": {"weight_kg": 86, "activity_multiplier": 35, "deficit_kcal": 400},
            "maintenance": {"weight_kg": 85, "activity_multiplier": 35, "activity_adjustment": -5, "cardio_option": 1}
        }"#;
        let input: ProgramInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.carb_policy, CarbPolicy::Reject);

        let plan = plan_program(&input).unwrap();
        assert_eq!(plan.step_progression(), [7000, 8750, 10938, 7657]);
        assert_eq!(
            plan.maintenance.targets().activity_multiplier,
            ActivityMultiplier::Light
        );
        // 85 * 30, no deficit in maintenance
        assert_eq!(plan.maintenance.targets().calories, 2550);
    }

    #[test]
    fn test_extreme_input_values_are_phase_errors() {
        let json = r#"{
            "initial_steps": 8000,
            "base": {"weight_kg": 80, "activity_multiplier": 35, "deficit_kcal": 500},
            "ramp_up_1": {"weight_kg": 78, "activity_multiplier": 35, "deficit_kcal": 400},
            "ramp_up_2": {"weight_kg": 77, "activity_multiplier": 35, "deficit_kcal": 400},
            "maintenance": {"weight_kg": 76, "activity_multiplier": 35, "activity_adjustment": 2147483647, "cardio_option": 2}
        }"#;
        let input: ProgramInput = serde_json::from_str(json).unwrap();
        assert!(matches!(
            plan_program(&input),
            Err(NutritionError::InvalidPhaseInput(_))
        ));

        let mut input = sample_input(CardioOption::StepsOnly);
        input.initial_steps = u32::MAX;
        assert!(matches!(
            plan_program(&input),
            Err(NutritionError::InvalidPhaseInput(_))
        ));
    }
}
