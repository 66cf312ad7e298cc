//! Terminal rendering of the comparison chart.
//!
//! Renders the three aligned series of a [`DisplayModel`] as a text table:
//! one row per charted feature, with the healthy reference, the declared
//! upper bound, and the user's value side by side.

use heartcheck_core::DisplayModel;

/// Renders the display model as an aligned text table.
pub fn render(model: &DisplayModel) -> String {
    let mut out = String::new();
    out.push_str("The Analysis of Patient info\n\n");
    out.push_str(&format!(
        "{:<16} {:>12} {:>12} {:>12}\n",
        "Feature", "Good Range", "Max Range", "Your Input"
    ));

    for (i, feature) in model.features.iter().enumerate() {
        out.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12}\n",
            feature,
            format_value(model.good_range[i]),
            format_value(model.max_range[i]),
            format_value(model.your_input[i]),
        ));
    }

    out
}

/// Whole numbers print without a decimal point; everything else keeps the
/// one-decimal precision the oldpeak input collects.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
