pub mod constants;
pub mod energy;
pub mod phases;
pub mod program;
pub mod scaler;
pub mod template;

pub use energy::{calculate, calculate_with_policy, CarbPolicy};
pub use phases::{base_phase, maintenance, ramp_up_1, ramp_up_2, PhaseRules};
pub use program::{plan_program, MaintenanceCheckIn, PhaseCheckIn, ProgramInput, ProgramPlan};
pub use scaler::{generate_adjusted_schema, scale_schema, validate_template, ScaledSchema};
pub use template::{default_template, DEFAULT_TEMPLATE_KCAL};
