//! Display model for a successful prediction.
//!
//! Given the verdict string returned by the prediction service and the form
//! the user submitted, [`present`] assembles the three aligned numeric series
//! shown on the comparison chart plus the headline verdict. The chart is
//! purely illustrative; no diagnostic logic lives here.

use crate::form::FormState;

/// The six features plotted on the comparison chart, in display order.
pub const CHART_FEATURES: [&str; 6] = [
    "Age",
    "Resting BP",
    "Cholesterol",
    "Max Heart Rate",
    "Old Peak",
    "Major Vessels",
];

/// Reference series of healthy values, aligned with [`CHART_FEATURES`].
pub const GOOD_RANGE: [f64; 6] = [50.0, 120.0, 200.0, 180.0, 1.0, 2.0];

/// Reference series of the declared upper input bounds, aligned with
/// [`CHART_FEATURES`].
pub const MAX_RANGE: [f64; 6] = [80.0, 200.0, 400.0, 220.0, 6.0, 4.0];

/// Chart-and-verdict display model for one successful prediction.
///
/// Constructed once per successful response, consumed once by the renderer,
/// then discarded. The three series are parallel: index `n` of each refers to
/// `features[n]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayModel {
    pub verdict: String,
    pub features: [&'static str; 6],
    pub your_input: [f64; 6],
    pub good_range: [f64; 6],
    pub max_range: [f64; 6],
}

/// Builds the display model from a verdict and the submitted form.
pub fn present(result: &str, form: &FormState) -> DisplayModel {
    DisplayModel {
        verdict: format!("Prediction: {}", result),
        features: CHART_FEATURES,
        your_input: [
            f64::from(form.age),
            f64::from(form.resting_bp),
            f64::from(form.cholesterol),
            f64::from(form.max_heart_rate),
            form.oldpeak,
            f64::from(form.major_vessels),
        ],
        good_range: GOOD_RANGE,
        max_range: MAX_RANGE,
    }
}
