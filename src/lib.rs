pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{NutritionError, Result};
pub use models::{
    ActivityMultiplier, CardioOption, NutritionCalculation, NutritionSchema, PhaseData,
    TargetNutrition,
};
