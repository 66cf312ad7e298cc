//! Form state for one submission attempt.
//!
//! A [`FormState`] holds the raw values of all thirteen inputs exactly as the
//! user entered them. It is created fresh per submission attempt and owned
//! exclusively by the current session; nothing is shared across sessions.

use crate::schema::{
    field_schema, ExerciseAngina, FastingBloodSugar, FieldDomain, RestingEcg, Sex, StSlope,
    Thalassemia,
};
use crate::{ScreeningError, ScreeningResult};

/// The raw values of one prediction form, prior to wire encoding.
///
/// Numeric fields keep their entered values; categorical fields are held as
/// their typed variants. Out-of-domain numerics are rejected at collection
/// time (bounded input parsing plus [`FormState::validate`]), so downstream
/// encoding is total.
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    pub age: u32,
    pub sex: Sex,
    pub resting_bp: u32,
    pub cholesterol: u32,
    pub fasting_bs: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    pub max_heart_rate: u32,
    pub exercise_angina: ExerciseAngina,
    pub oldpeak: f64,
    pub slope: StSlope,
    pub major_vessels: u8,
    pub thalassemia: Thalassemia,
    pub chest_pain_type: u8,
}

impl FormState {
    /// Checks every numeric field against its declared schema domain.
    ///
    /// The collection surface already restricts inputs to their domains, so
    /// this is a re-check that keeps the library API safe when values arrive
    /// from somewhere other than the bounded parsers.
    ///
    /// # Errors
    ///
    /// Returns `ScreeningError::OutOfRange` naming the first offending field.
    pub fn validate(&self) -> ScreeningResult<()> {
        check_numeric("age", f64::from(self.age))?;
        check_numeric("resting_bp", f64::from(self.resting_bp))?;
        check_numeric("cholesterol", f64::from(self.cholesterol))?;
        check_numeric("max_heart_rate", f64::from(self.max_heart_rate))?;
        check_numeric("oldpeak", self.oldpeak)?;
        check_numeric("major_vessels", f64::from(self.major_vessels))?;
        check_numeric("chest_pain_type", f64::from(self.chest_pain_type))?;
        Ok(())
    }
}

fn check_numeric(name: &'static str, value: f64) -> ScreeningResult<()> {
    let schema = field_schema(name).ok_or_else(|| {
        ScreeningError::InvalidInput(format!("no schema declared for field '{}'", name))
    })?;

    match schema.domain {
        FieldDomain::Numeric { min, max, .. } => {
            if value < min || value > max {
                return Err(ScreeningError::OutOfRange {
                    field: name,
                    value,
                    min,
                    max,
                });
            }
            Ok(())
        }
        FieldDomain::Categorical { .. } => Err(ScreeningError::InvalidInput(format!(
            "field '{}' is categorical, not numeric",
            name
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FormState {
        FormState {
            age: 54,
            sex: Sex::Male,
            resting_bp: 130,
            cholesterol: 246,
            fasting_bs: FastingBloodSugar::False,
            resting_ecg: RestingEcg::Normal,
            max_heart_rate: 150,
            exercise_angina: ExerciseAngina::False,
            oldpeak: 1.0,
            slope: StSlope::Flat,
            major_vessels: 0,
            thalassemia: Thalassemia::Normal,
            chest_pain_type: 0,
        }
    }

    #[test]
    fn test_in_domain_form_validates() {
        assert!(sample_form().validate().is_ok());
    }

    #[test]
    fn test_boundary_values_are_inclusive() {
        let mut form = sample_form();
        form.age = 10;
        form.oldpeak = 6.0;
        form.major_vessels = 4;
        assert!(form.validate().is_ok());

        form.age = 80;
        form.oldpeak = 0.0;
        form.major_vessels = 0;
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let mut form = sample_form();
        form.age = 9;
        let err = form.validate().unwrap_err();
        assert!(
            matches!(err, ScreeningError::OutOfRange { field: "age", .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_out_of_range_oldpeak_rejected() {
        let mut form = sample_form();
        form.oldpeak = 6.1;
        assert!(matches!(
            form.validate(),
            Err(ScreeningError::OutOfRange {
                field: "oldpeak",
                ..
            })
        ));
    }
}
