// ─────────────────────────────────────────────────────────────────────────────
// Energy budget
// ─────────────────────────────────────────────────────────────────────────────

/// Protein target in grams per kg of bodyweight.
pub const PROTEIN_G_PER_KG: f64 = 2.5;

/// Fat target in grams per kg of bodyweight.
pub const FAT_G_PER_KG: f64 = 0.7;

/// Atwater energy factors.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Phase progression
// ─────────────────────────────────────────────────────────────────────────────

/// Step growth applied in each ramp-up phase.
pub const RAMP_UP_STEP_FACTOR: f64 = 1.25;

/// Share of phase-3 steps kept when maintenance adds cardio.
pub const MAINTENANCE_STEP_FACTOR: f64 = 0.70;

pub const RAMP_UP_1_CARDIO_MINUTES: u32 = 10;
pub const RAMP_UP_1_CARDIO: &str = "10 rounds interval: 15s max effort / 45s easy";

pub const RAMP_UP_2_CARDIO_MINUTES: u32 = 20;
pub const RAMP_UP_2_CARDIO: &str = "12 interval rounds + 8 min steady state";

pub const MAINTENANCE_CARDIO_MINUTES: u32 = 12;
pub const MAINTENANCE_CARDIO: &str = "12 interval rounds after strength training";
pub const MAINTENANCE_NO_CARDIO: &str = "No cardio — focus on daily steps";

// ─────────────────────────────────────────────────────────────────────────────
// Meal schema scaling
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places kept on scaled amounts and nutrients.
pub const SCHEMA_DECIMALS: u32 = 1;

/// Round to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(61.3146, 1), 61.3);
        assert_eq!(round_to(61.36, 1), 61.4);
        assert_eq!(round_to(2.0, 1), 2.0);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }
}
