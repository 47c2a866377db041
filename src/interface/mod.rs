pub mod prompts;
pub mod render;

pub use prompts::{
    collect_budget_inputs, prompt_activity, prompt_cardio_option, prompt_deficit, prompt_steps,
    prompt_weight, prompt_yes_no,
};
pub use render::{display_calculation, display_phase, display_program, display_schema};
