pub mod nutrition;
pub mod phase;
pub mod schema;

pub use nutrition::{ActivityMultiplier, NutritionCalculation, TargetNutrition};
pub use phase::{CardioDirective, CardioOption, PhaseData, PhaseRecord, PhaseTargets};
pub use schema::{Meal, MealItem, NutritionSchema, Totals};
