//! Clinical input field schemas.
//!
//! This module declares the thirteen inputs of the prediction form: numeric
//! fields with inclusive min/max bounds and a step, and categorical fields
//! whose wire value is the zero-based position of the chosen label in a fixed
//! label list.
//!
//! Each multi-label categorical field is represented as an explicit enum
//! carrying its wire code rather than a bare label list indexed at encode
//! time. The declared label order is part of the remote contract: the
//! prediction service was trained against these integer codes, so reordering
//! a label list (or an enum) is a breaking change to the wire contract.
//!
//! Key types:
//! - [`FieldSchema`]: declarative bounds/encoding rule for one input.
//! - [`Sex`], [`RestingEcg`], [`StSlope`], [`Thalassemia`] and friends: the
//!   categorical fields, each variant mapped to its wire code.

use std::fmt;
use std::str::FromStr;

use crate::{ScreeningError, ScreeningResult};

/// Domain of one clinical input field.
///
/// Numeric bounds are inclusive. Categorical labels are listed in wire order:
/// the label at position `n` encodes to the integer `n`.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldDomain {
    Numeric { min: f64, max: f64, step: f64 },
    Categorical { labels: &'static [&'static str] },
}

/// Declarative description of one clinical input field.
///
/// `name` is the wire key used in the prediction request JSON; `label` is the
/// human-readable prompt shown at collection time.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub domain: FieldDomain,
}

/// The thirteen input fields, in wire order.
pub const FIELD_SCHEMAS: &[FieldSchema] = &[
    FieldSchema {
        name: "age",
        label: "Age",
        domain: FieldDomain::Numeric {
            min: 10.0,
            max: 80.0,
            step: 1.0,
        },
    },
    FieldSchema {
        name: "sex",
        label: "Sex",
        domain: FieldDomain::Categorical { labels: &Sex::LABELS },
    },
    FieldSchema {
        name: "resting_bp",
        label: "Resting Blood Pressure",
        domain: FieldDomain::Numeric {
            min: 80.0,
            max: 200.0,
            step: 1.0,
        },
    },
    FieldSchema {
        name: "cholesterol",
        label: "Cholesterol Level",
        domain: FieldDomain::Numeric {
            min: 100.0,
            max: 400.0,
            step: 1.0,
        },
    },
    FieldSchema {
        name: "fasting_bs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        domain: FieldDomain::Categorical {
            labels: &FastingBloodSugar::LABELS,
        },
    },
    FieldSchema {
        name: "resting_ecg",
        label: "Resting ECG",
        domain: FieldDomain::Categorical {
            labels: &RestingEcg::LABELS,
        },
    },
    FieldSchema {
        name: "max_heart_rate",
        label: "Maximum Heart Rate Achieved",
        domain: FieldDomain::Numeric {
            min: 60.0,
            max: 220.0,
            step: 1.0,
        },
    },
    FieldSchema {
        name: "exercise_angina",
        label: "Exercise-Induced Angina",
        domain: FieldDomain::Categorical {
            labels: &ExerciseAngina::LABELS,
        },
    },
    FieldSchema {
        name: "oldpeak",
        label: "Old Peak (ST depression induced by exercise)",
        domain: FieldDomain::Numeric {
            min: 0.0,
            max: 6.0,
            step: 0.1,
        },
    },
    FieldSchema {
        name: "slope",
        label: "Slope of the Peak Exercise ST Segment",
        domain: FieldDomain::Categorical {
            labels: &StSlope::LABELS,
        },
    },
    FieldSchema {
        name: "major_vessels",
        label: "Number of Major Vessels (colored by fluoroscopy)",
        domain: FieldDomain::Numeric {
            min: 0.0,
            max: 4.0,
            step: 1.0,
        },
    },
    FieldSchema {
        name: "thalassemia",
        label: "Thalassemia",
        domain: FieldDomain::Categorical {
            labels: &Thalassemia::LABELS,
        },
    },
    // Collected directly as an integer code; the upstream data set never
    // shipped label text for this field.
    FieldSchema {
        name: "chest_pain_type",
        label: "Chest Pain Type (0=Asymptomatic, 1=Atypical Angina, etc.)",
        domain: FieldDomain::Numeric {
            min: 0.0,
            max: 3.0,
            step: 1.0,
        },
    },
];

/// Looks up a field schema by its wire name.
pub fn field_schema(name: &str) -> Option<&'static FieldSchema> {
    FIELD_SCHEMAS.iter().find(|schema| schema.name == name)
}

fn unknown_label(field: &str, input: &str, labels: &[&str]) -> ScreeningError {
    ScreeningError::InvalidInput(format!(
        "unknown {} label '{}' (expected one of: {})",
        field,
        input,
        labels.join(", ")
    ))
}

/// Patient sex as collected on the form.
///
/// Wire codes: `Female` = 0, `Male` = 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub const LABELS: [&'static str; 2] = ["Female", "Male"];

    /// Integer code transmitted on the wire.
    pub fn wire_code(self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for Sex {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Ok(Sex::Female),
            "male" => Ok(Sex::Male),
            _ => Err(unknown_label("sex", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether fasting blood sugar exceeds 120 mg/dl.
///
/// Wire codes: `False` = 0, `True` = 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FastingBloodSugar {
    False,
    True,
}

impl FastingBloodSugar {
    pub const LABELS: [&'static str; 2] = ["False", "True"];

    pub fn wire_code(self) -> u8 {
        match self {
            FastingBloodSugar::False => 0,
            FastingBloodSugar::True => 1,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for FastingBloodSugar {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" => Ok(FastingBloodSugar::False),
            "true" => Ok(FastingBloodSugar::True),
            _ => Err(unknown_label("fasting_bs", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for FastingBloodSugar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resting electrocardiogram classification.
///
/// Wire codes: `Normal` = 0, `SttWaveAbnormality` = 1,
/// `LeftVentricularHypertrophy` = 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestingEcg {
    Normal,
    SttWaveAbnormality,
    LeftVentricularHypertrophy,
}

impl RestingEcg {
    pub const LABELS: [&'static str; 3] = [
        "Normal",
        "ST-T Wave Abnormality",
        "Left Ventricular Hypertrophy",
    ];

    pub fn wire_code(self) -> u8 {
        match self {
            RestingEcg::Normal => 0,
            RestingEcg::SttWaveAbnormality => 1,
            RestingEcg::LeftVentricularHypertrophy => 2,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for RestingEcg {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(RestingEcg::Normal),
            "st-t wave abnormality" => Ok(RestingEcg::SttWaveAbnormality),
            "left ventricular hypertrophy" => Ok(RestingEcg::LeftVentricularHypertrophy),
            _ => Err(unknown_label("resting_ecg", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for RestingEcg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Whether exercise induced angina.
///
/// Wire codes: `False` = 0, `True` = 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExerciseAngina {
    False,
    True,
}

impl ExerciseAngina {
    pub const LABELS: [&'static str; 2] = ["False", "True"];

    pub fn wire_code(self) -> u8 {
        match self {
            ExerciseAngina::False => 0,
            ExerciseAngina::True => 1,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for ExerciseAngina {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "false" => Ok(ExerciseAngina::False),
            "true" => Ok(ExerciseAngina::True),
            _ => Err(unknown_label("exercise_angina", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for ExerciseAngina {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Slope of the peak exercise ST segment.
///
/// Wire codes: `Upsloping` = 0, `Flat` = 1, `Downsloping` = 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StSlope {
    Upsloping,
    Flat,
    Downsloping,
}

impl StSlope {
    pub const LABELS: [&'static str; 3] = ["Upsloping", "Flat", "Downsloping"];

    pub fn wire_code(self) -> u8 {
        match self {
            StSlope::Upsloping => 0,
            StSlope::Flat => 1,
            StSlope::Downsloping => 2,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for StSlope {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsloping" => Ok(StSlope::Upsloping),
            "flat" => Ok(StSlope::Flat),
            "downsloping" => Ok(StSlope::Downsloping),
            _ => Err(unknown_label("slope", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for StSlope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Thalassemia classification.
///
/// Wire codes: `Normal` = 0, `FixedDefect` = 1, `ReversibleDefect` = 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thalassemia {
    Normal,
    FixedDefect,
    ReversibleDefect,
}

impl Thalassemia {
    pub const LABELS: [&'static str; 3] = ["Normal", "Fixed Defect", "Reversible Defect"];

    pub fn wire_code(self) -> u8 {
        match self {
            Thalassemia::Normal => 0,
            Thalassemia::FixedDefect => 1,
            Thalassemia::ReversibleDefect => 2,
        }
    }

    pub fn label(self) -> &'static str {
        Self::LABELS[self.wire_code() as usize]
    }
}

impl FromStr for Thalassemia {
    type Err = ScreeningError;

    fn from_str(s: &str) -> ScreeningResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Thalassemia::Normal),
            "fixed defect" => Ok(Thalassemia::FixedDefect),
            "reversible defect" => Ok(Thalassemia::ReversibleDefect),
            _ => Err(unknown_label("thalassemia", s, &Self::LABELS)),
        }
    }
}

impl fmt::Display for Thalassemia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thirteen_fields_in_wire_order() {
        let names: Vec<&str> = FIELD_SCHEMAS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "age",
                "sex",
                "resting_bp",
                "cholesterol",
                "fasting_bs",
                "resting_ecg",
                "max_heart_rate",
                "exercise_angina",
                "oldpeak",
                "slope",
                "major_vessels",
                "thalassemia",
                "chest_pain_type",
            ]
        );
    }

    #[test]
    fn test_field_schema_lookup() {
        let schema = field_schema("oldpeak").unwrap();
        assert_eq!(
            schema.domain,
            FieldDomain::Numeric {
                min: 0.0,
                max: 6.0,
                step: 0.1
            }
        );
        assert!(field_schema("heart_rate").is_none());
    }

    #[test]
    fn test_wire_code_equals_label_position() {
        // The wire code of every categorical variant must equal the position
        // of its label in the declared label list.
        for schema in FIELD_SCHEMAS {
            if let FieldDomain::Categorical { labels } = &schema.domain {
                for (position, label) in labels.iter().enumerate() {
                    let code = match schema.name {
                        "sex" => label.parse::<Sex>().unwrap().wire_code(),
                        "fasting_bs" => label.parse::<FastingBloodSugar>().unwrap().wire_code(),
                        "resting_ecg" => label.parse::<RestingEcg>().unwrap().wire_code(),
                        "exercise_angina" => label.parse::<ExerciseAngina>().unwrap().wire_code(),
                        "slope" => label.parse::<StSlope>().unwrap().wire_code(),
                        "thalassemia" => label.parse::<Thalassemia>().unwrap().wire_code(),
                        other => panic!("unexpected categorical field {}", other),
                    };
                    assert_eq!(code as usize, position, "field {}", schema.name);
                }
            }
        }
    }

    #[test]
    fn test_sex_binary_encoding_is_order_stable() {
        assert_eq!(Sex::Female.wire_code(), 0);
        assert_eq!(Sex::Male.wire_code(), 1);
        // Call order must not matter.
        assert_eq!(Sex::Male.wire_code(), 1);
        assert_eq!(Sex::Female.wire_code(), 0);
    }

    #[test]
    fn test_label_parsing_is_case_insensitive() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!("FEMALE".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!(
            "left ventricular hypertrophy".parse::<RestingEcg>().unwrap(),
            RestingEcg::LeftVentricularHypertrophy
        );
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "Other".parse::<Thalassemia>().unwrap_err();
        assert!(matches!(err, ScreeningError::InvalidInput(_)));
    }

    #[test]
    fn test_labels_round_trip_through_display() {
        for label in RestingEcg::LABELS {
            let parsed = label.parse::<RestingEcg>().unwrap();
            assert_eq!(parsed.to_string(), label);
        }
        for label in StSlope::LABELS {
            let parsed = label.parse::<StSlope>().unwrap();
            assert_eq!(parsed.to_string(), label);
        }
    }
}
