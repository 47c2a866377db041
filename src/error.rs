use thiserror::Error;

#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid phase input: {0}")]
    InvalidPhaseInput(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// Carbohydrate budget went negative after protein and fat were allotted.
    #[error("Negative carbohydrate target: {carbs_g} g ({remaining_kcal:.1} kcal left after protein and fat)")]
    ArithmeticAnomaly { remaining_kcal: f64, carbs_g: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, NutritionError>;
