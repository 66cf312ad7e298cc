//! Wire encoding of a form submission.
//!
//! [`encode`] turns a [`FormState`] into the fixed-shape JSON record the
//! prediction service expects. Encoding is a pure, total function over any
//! in-domain form: numerics pass through unchanged and categoricals become
//! their wire codes, so there is no error path here.

use serde::Serialize;

use crate::form::FormState;

/// The wire record posted to the prediction endpoint.
///
/// Exactly thirteen named numeric fields, serialised as a flat JSON object.
/// Field names match the remote contract and must not be renamed without a
/// matching change on the service side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub age: u32,
    pub sex: u8,
    pub resting_bp: u32,
    pub cholesterol: u32,
    pub fasting_bs: u8,
    pub resting_ecg: u8,
    pub max_heart_rate: u32,
    pub exercise_angina: u8,
    pub oldpeak: f64,
    pub slope: u8,
    pub major_vessels: u8,
    pub thalassemia: u8,
    pub chest_pain_type: u8,
}

/// Encodes a form into its wire record.
pub fn encode(form: &FormState) -> PredictionRequest {
    PredictionRequest {
        age: form.age,
        sex: form.sex.wire_code(),
        resting_bp: form.resting_bp,
        cholesterol: form.cholesterol,
        fasting_bs: form.fasting_bs.wire_code(),
        resting_ecg: form.resting_ecg.wire_code(),
        max_heart_rate: form.max_heart_rate,
        exercise_angina: form.exercise_angina.wire_code(),
        oldpeak: form.oldpeak,
        slope: form.slope.wire_code(),
        major_vessels: form.major_vessels,
        thalassemia: form.thalassemia.wire_code(),
        chest_pain_type: form.chest_pain_type,
    }
}
