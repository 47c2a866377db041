use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};
use crate::models::nutrition::{ActivityMultiplier, NutritionCalculation};

/// Maintenance-phase activity strategy picked by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CardioOption {
    /// Steps drop to 70% and a short interval block follows strength work.
    ReducedStepsWithCardio = 1,
    /// Steps stay where phase 3 left them; no cardio.
    StepsOnly = 2,
}

impl CardioOption {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CardioOption {
    type Error = NutritionError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(CardioOption::ReducedStepsWithCardio),
            2 => Ok(CardioOption::StepsOnly),
            other => Err(NutritionError::InvalidPhaseInput(format!(
                "cardio option must be 1 or 2 (got {})",
                other
            ))),
        }
    }
}

impl From<CardioOption> for u8 {
    fn from(value: CardioOption) -> Self {
        value.value()
    }
}

/// A fixed cardio prescription attached to a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardioDirective {
    pub minutes: Option<u32>,
    pub description: String,
}

impl CardioDirective {
    pub fn new(minutes: Option<u32>, description: &str) -> Self {
        Self {
            minutes,
            description: description.to_string(),
        }
    }
}

/// Targets shared by every phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTargets {
    pub weight_kg: f64,
    pub activity_multiplier: ActivityMultiplier,
    pub steps: u32,
    pub calories: i64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

impl PhaseTargets {
    pub fn new(
        weight_kg: f64,
        activity_multiplier: ActivityMultiplier,
        steps: u32,
        nutrition: &NutritionCalculation,
    ) -> Self {
        Self {
            weight_kg,
            activity_multiplier,
            steps,
            calories: nutrition.kcal,
            protein_g: nutrition.protein_g,
            fat_g: nutrition.fat_g,
            carbs_g: nutrition.carbs_g,
        }
    }
}

/// Result of one program phase.
///
/// Built once per phase computation and never mutated. On the wire it is a
/// flat record carrying a numeric `phase` tag (see [`PhaseRecord`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PhaseRecord", try_from = "PhaseRecord")]
pub enum PhaseData {
    Base(PhaseTargets),
    RampUp1 {
        targets: PhaseTargets,
        cardio: CardioDirective,
    },
    RampUp2 {
        targets: PhaseTargets,
        cardio: CardioDirective,
    },
    Maintenance {
        targets: PhaseTargets,
        activity_adjustment: i32,
        cardio_option: CardioOption,
        cardio: CardioDirective,
    },
}

impl PhaseData {
    pub fn phase_number(&self) -> u8 {
        match self {
            PhaseData::Base(_) => 1,
            PhaseData::RampUp1 { .. } => 2,
            PhaseData::RampUp2 { .. } => 3,
            PhaseData::Maintenance { .. } => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PhaseData::Base(_) => "Base",
            PhaseData::RampUp1 { .. } => "Ramp-up 1",
            PhaseData::RampUp2 { .. } => "Ramp-up 2",
            PhaseData::Maintenance { .. } => "Maintenance",
        }
    }

    pub fn targets(&self) -> &PhaseTargets {
        match self {
            PhaseData::Base(targets)
            | PhaseData::RampUp1 { targets, .. }
            | PhaseData::RampUp2 { targets, .. }
            | PhaseData::Maintenance { targets, .. } => targets,
        }
    }

    pub fn steps(&self) -> u32 {
        self.targets().steps
    }

    /// Cardio prescription, absent for the base phase.
    pub fn cardio(&self) -> Option<&CardioDirective> {
        match self {
            PhaseData::Base(_) => None,
            PhaseData::RampUp1 { cardio, .. }
            | PhaseData::RampUp2 { cardio, .. }
            | PhaseData::Maintenance { cardio, .. } => Some(cardio),
        }
    }
}

/// Flat serialized form of [`PhaseData`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub phase: u8,
    pub weight: f64,
    pub activity_multiplier: ActivityMultiplier,
    pub steps: u32,
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardio_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardio_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_adjustment: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cardio_option: Option<CardioOption>,
}

impl From<PhaseData> for PhaseRecord {
    fn from(data: PhaseData) -> Self {
        let phase = data.phase_number();
        let t = *data.targets();
        let mut record = PhaseRecord {
            phase,
            weight: t.weight_kg,
            activity_multiplier: t.activity_multiplier,
            steps: t.steps,
            calories: t.calories,
            protein: t.protein_g,
            fat: t.fat_g,
            carbs: t.carbs_g,
            cardio_minutes: None,
            cardio_description: None,
            activity_adjustment: None,
            cardio_option: None,
        };

        match data {
            PhaseData::Base(_) => {}
            PhaseData::RampUp1 { cardio, .. } | PhaseData::RampUp2 { cardio, .. } => {
                record.cardio_minutes = cardio.minutes;
                record.cardio_description = Some(cardio.description);
            }
            PhaseData::Maintenance {
                activity_adjustment,
                cardio_option,
                cardio,
                ..
            } => {
                record.cardio_minutes = cardio.minutes;
                record.cardio_description = Some(cardio.description);
                record.activity_adjustment = Some(activity_adjustment);
                record.cardio_option = Some(cardio_option);
            }
        }

        record
    }
}

impl TryFrom<PhaseRecord> for PhaseData {
    type Error = NutritionError;

    fn try_from(record: PhaseRecord) -> Result<Self> {
        let targets = PhaseTargets {
            weight_kg: record.weight,
            activity_multiplier: record.activity_multiplier,
            steps: record.steps,
            calories: record.calories,
            protein_g: record.protein,
            fat_g: record.fat,
            carbs_g: record.carbs,
        };
        let has_phase4_fields =
            record.activity_adjustment.is_some() || record.cardio_option.is_some();

        match record.phase {
            1 => {
                if record.cardio_minutes.is_some()
                    || record.cardio_description.is_some()
                    || has_phase4_fields
                {
                    return Err(mismatch(1, "carries cardio or maintenance fields"));
                }
                Ok(PhaseData::Base(targets))
            }
            2 | 3 => {
                if has_phase4_fields {
                    return Err(mismatch(record.phase, "carries maintenance fields"));
                }
                let (Some(minutes), Some(description)) =
                    (record.cardio_minutes, record.cardio_description)
                else {
                    return Err(mismatch(record.phase, "is missing its cardio directive"));
                };
                let cardio = CardioDirective {
                    minutes: Some(minutes),
                    description,
                };
                if record.phase == 2 {
                    Ok(PhaseData::RampUp1 { targets, cardio })
                } else {
                    Ok(PhaseData::RampUp2 { targets, cardio })
                }
            }
            4 => {
                let (Some(activity_adjustment), Some(cardio_option), Some(description)) = (
                    record.activity_adjustment,
                    record.cardio_option,
                    record.cardio_description,
                ) else {
                    return Err(mismatch(4, "is missing maintenance fields"));
                };
                Ok(PhaseData::Maintenance {
                    targets,
                    activity_adjustment,
                    cardio_option,
                    cardio: CardioDirective {
                        minutes: record.cardio_minutes,
                        description,
                    },
                })
            }
            other => Err(NutritionError::InvalidPhaseInput(format!(
                "phase number must be 1-4 (got {})",
                other
            ))),
        }
    }
}

fn mismatch(phase: u8, what: &str) -> NutritionError {
    NutritionError::InvalidPhaseInput(format!("phase {} record {}", phase, what))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn targets(steps: u32) -> PhaseTargets {
        PhaseTargets {
            weight_kg: 80.0,
            activity_multiplier: ActivityMultiplier::Moderate,
            steps,
            calories: 2300,
            protein_g: 200,
            fat_g: 56,
            carbs_g: 249,
        }
    }

    #[rstest]
    #[case(1, Ok(CardioOption::ReducedStepsWithCardio))]
    #[case(2, Ok(CardioOption::StepsOnly))]
    #[case(0, Err(()))]
    #[case(3, Err(()))]
    fn test_cardio_option_from_value(#[case] raw: u8, #[case] expected: std::result::Result<CardioOption, ()>) {
        let parsed = CardioOption::try_from(raw).map_err(|_| ());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_base_phase_serializes_without_cardio() {
        let data = PhaseData::Base(targets(8000));
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["phase"], 1);
        assert_eq!(json["steps"], 8000);
        assert_eq!(json["activity_multiplier"], 35);
        assert!(json.get("cardio_minutes").is_none());
        assert!(json.get("cardio_option").is_none());
    }

    #[test]
    fn test_maintenance_steps_only_omits_minutes() {
        let data = PhaseData::Maintenance {
            targets: targets(12500),
            activity_adjustment: 0,
            cardio_option: CardioOption::StepsOnly,
            cardio: CardioDirective::new(None, "No cardio"),
        };
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json["phase"], 4);
        assert_eq!(json["cardio_option"], 2);
        assert!(json.get("cardio_minutes").is_none());

        let back: PhaseData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_record_with_wrong_fields_is_rejected() {
        let json = serde_json::json!({
            "phase": 2,
            "weight": 78.0,
            "activity_multiplier": 35,
            "steps": 10000,
            "calories": 2330,
            "protein": 195,
            "fat": 55,
            "carbs": 267
        });
        assert!(serde_json::from_value::<PhaseData>(json).is_err());

        let json = serde_json::json!({
            "phase": 1,
            "weight": 80.0,
            "activity_multiplier": 35,
            "steps": 8000,
            "calories": 2300,
            "protein": 200,
            "fat": 56,
            "carbs": 249,
            "cardio_minutes": 10,
            "cardio_description": "intervals"
        });
        assert!(serde_json::from_value::<PhaseData>(json).is_err());
    }

    #[test]
    fn test_accessors() {
        let data = PhaseData::RampUp2 {
            targets: targets(12500),
            cardio: CardioDirective::new(Some(20), "intervals"),
        };
        assert_eq!(data.phase_number(), 3);
        assert_eq!(data.steps(), 12500);
        assert_eq!(data.cardio().and_then(|c| c.minutes), Some(20));
        assert!(PhaseData::Base(targets(1)).cardio().is_none());
    }
}
