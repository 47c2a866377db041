use tracing::debug;

use crate::error::{NutritionError, Result};
use crate::models::{
    ActivityMultiplier, CardioDirective, CardioOption, NutritionCalculation, PhaseData,
    PhaseTargets,
};
use crate::planner::constants::*;
use crate::planner::energy::{calculate_with_policy, validate_deficit, validate_weight, CarbPolicy};

/// Progression constants for the four program phases.
///
/// `PhaseRules::default()` is the standard 90-day program.
#[derive(Debug, Clone)]
pub struct PhaseRules {
    pub ramp_up_step_factor: f64,
    pub maintenance_step_factor: f64,
    pub ramp_up_1_cardio: CardioDirective,
    pub ramp_up_2_cardio: CardioDirective,
    pub maintenance_cardio: CardioDirective,
    pub maintenance_no_cardio: CardioDirective,
    pub carb_policy: CarbPolicy,
}

impl Default for PhaseRules {
    fn default() -> Self {
        Self {
            ramp_up_step_factor: RAMP_UP_STEP_FACTOR,
            maintenance_step_factor: MAINTENANCE_STEP_FACTOR,
            ramp_up_1_cardio: CardioDirective::new(Some(RAMP_UP_1_CARDIO_MINUTES), RAMP_UP_1_CARDIO),
            ramp_up_2_cardio: CardioDirective::new(Some(RAMP_UP_2_CARDIO_MINUTES), RAMP_UP_2_CARDIO),
            maintenance_cardio: CardioDirective::new(
                Some(MAINTENANCE_CARDIO_MINUTES),
                MAINTENANCE_CARDIO,
            ),
            maintenance_no_cardio: CardioDirective::new(None, MAINTENANCE_NO_CARDIO),
            carb_policy: CarbPolicy::Reject,
        }
    }
}

impl PhaseRules {
    pub fn with_carb_policy(mut self, policy: CarbPolicy) -> Self {
        self.carb_policy = policy;
        self
    }

    /// Phase 1: the plain energy budget plus the client's current step count.
    pub fn base_phase(
        &self,
        weight_kg: f64,
        activity: ActivityMultiplier,
        deficit_kcal: f64,
        steps: u32,
    ) -> Result<PhaseData> {
        let nutrition = self.budget(weight_kg, activity, deficit_kcal)?;
        let data = PhaseData::Base(PhaseTargets::new(weight_kg, activity, steps, &nutrition));
        log_phase(&data);
        Ok(data)
    }

    /// Phase 2: steps up 25% on phase 1, short interval cardio.
    pub fn ramp_up_1(
        &self,
        previous_steps: u32,
        weight_kg: f64,
        activity: ActivityMultiplier,
        deficit_kcal: f64,
    ) -> Result<PhaseData> {
        let steps = self.ramp_steps(previous_steps, 2)?;
        let nutrition = self.budget(weight_kg, activity, deficit_kcal)?;
        let data = PhaseData::RampUp1 {
            targets: PhaseTargets::new(weight_kg, activity, steps, &nutrition),
            cardio: self.ramp_up_1_cardio.clone(),
        };
        log_phase(&data);
        Ok(data)
    }

    /// Phase 3: steps up another 25% on phase 2, longer cardio block.
    pub fn ramp_up_2(
        &self,
        previous_steps: u32,
        weight_kg: f64,
        activity: ActivityMultiplier,
        deficit_kcal: f64,
    ) -> Result<PhaseData> {
        let steps = self.ramp_steps(previous_steps, 3)?;
        let nutrition = self.budget(weight_kg, activity, deficit_kcal)?;
        let data = PhaseData::RampUp2 {
            targets: PhaseTargets::new(weight_kg, activity, steps, &nutrition),
            cardio: self.ramp_up_2_cardio.clone(),
        };
        log_phase(&data);
        Ok(data)
    }

    /// Phase 4: maintenance calories (no deficit) at an adjusted activity level.
    ///
    /// `activity_adjustment` is added to the base multiplier and must land on
    /// one of the four levels.
    pub fn maintenance(
        &self,
        previous_steps: u32,
        weight_kg: f64,
        base_activity: ActivityMultiplier,
        activity_adjustment: i32,
        cardio_option: CardioOption,
    ) -> Result<PhaseData> {
        require_previous_steps(previous_steps, 4)?;
        let activity = base_activity
            .checked_adjust(activity_adjustment)
            .ok_or_else(|| {
                NutritionError::InvalidPhaseInput(format!(
                    "activity adjustment {:+} moves multiplier {} off the 25/30/35/40 scale",
                    activity_adjustment, base_activity
                ))
            })?;

        let (steps, cardio) = match cardio_option {
            CardioOption::ReducedStepsWithCardio => (
                scale_steps(previous_steps, self.maintenance_step_factor, 4)?,
                self.maintenance_cardio.clone(),
            ),
            CardioOption::StepsOnly => (previous_steps, self.maintenance_no_cardio.clone()),
        };

        let nutrition = self.budget(weight_kg, activity, 0.0)?;
        let data = PhaseData::Maintenance {
            targets: PhaseTargets::new(weight_kg, activity, steps, &nutrition),
            activity_adjustment,
            cardio_option,
            cardio,
        };
        log_phase(&data);
        Ok(data)
    }

    fn ramp_steps(&self, previous_steps: u32, phase: u8) -> Result<u32> {
        require_previous_steps(previous_steps, phase)?;
        scale_steps(previous_steps, self.ramp_up_step_factor, phase)
    }

    /// Validate phase inputs up front, then run the energy budget.
    fn budget(
        &self,
        weight_kg: f64,
        activity: ActivityMultiplier,
        deficit_kcal: f64,
    ) -> Result<NutritionCalculation> {
        validate_weight(weight_kg)
            .and_then(|_| validate_deficit(deficit_kcal))
            .map_err(into_phase_error)?;
        calculate_with_policy(weight_kg, activity, deficit_kcal, self.carb_policy)
    }
}

/// Phase 1 with the standard rules.
pub fn base_phase(
    weight_kg: f64,
    activity: ActivityMultiplier,
    deficit_kcal: f64,
    steps: u32,
) -> Result<PhaseData> {
    PhaseRules::default().base_phase(weight_kg, activity, deficit_kcal, steps)
}

/// Phase 2 with the standard rules.
pub fn ramp_up_1(
    previous_steps: u32,
    weight_kg: f64,
    activity: ActivityMultiplier,
    deficit_kcal: f64,
) -> Result<PhaseData> {
    PhaseRules::default().ramp_up_1(previous_steps, weight_kg, activity, deficit_kcal)
}

/// Phase 3 with the standard rules.
pub fn ramp_up_2(
    previous_steps: u32,
    weight_kg: f64,
    activity: ActivityMultiplier,
    deficit_kcal: f64,
) -> Result<PhaseData> {
    PhaseRules::default().ramp_up_2(previous_steps, weight_kg, activity, deficit_kcal)
}

/// Phase 4 with the standard rules.
pub fn maintenance(
    previous_steps: u32,
    weight_kg: f64,
    base_activity: ActivityMultiplier,
    activity_adjustment: i32,
    cardio_option: CardioOption,
) -> Result<PhaseData> {
    PhaseRules::default().maintenance(
        previous_steps,
        weight_kg,
        base_activity,
        activity_adjustment,
        cardio_option,
    )
}

/// Scaled step count; a result that no longer fits in `u32` is an error.
fn scale_steps(steps: u32, factor: f64, phase: u8) -> Result<u32> {
    let scaled = (f64::from(steps) * factor).round();
    if !(0.0..=f64::from(u32::MAX)).contains(&scaled) {
        return Err(NutritionError::InvalidPhaseInput(format!(
            "phase {} step count {} x {} does not fit in a step counter",
            phase, steps, factor
        )));
    }
    Ok(scaled as u32)
}

fn require_previous_steps(previous_steps: u32, phase: u8) -> Result<()> {
    if previous_steps == 0 {
        return Err(NutritionError::InvalidPhaseInput(format!(
            "phase {} needs the previous phase's step count (got 0)",
            phase
        )));
    }
    Ok(())
}

fn into_phase_error(err: NutritionError) -> NutritionError {
    match err {
        NutritionError::InvalidInput(msg) => NutritionError::InvalidPhaseInput(msg),
        other => other,
    }
}

fn log_phase(data: &PhaseData) {
    let t = data.targets();
    debug!(
        phase = data.phase_number(),
        weight_kg = t.weight_kg,
        activity = t.activity_multiplier.value(),
        steps = t.steps,
        calories = t.calories,
        cardio_minutes = data.cardio().and_then(|c| c.minutes),
        "Phase computed"
    );
}
