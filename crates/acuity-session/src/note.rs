//! Formatting of completed scores for the host note editor.

use acuity_core::models::scale::ScaleDefinition;
use acuity_core::models::score::ScoreCalculation;

/// Render a completed score as a note line:
/// `"<abbreviation>: <rawScore> [(<grade>)] - <interpretation> [<date>]"`.
pub fn note_line(
    scale: &ScaleDefinition,
    calculation: &ScoreCalculation,
    date: jiff::civil::Date,
) -> String {
    let score = format_score(calculation.raw_score);
    let grade = calculation
        .grade
        .as_ref()
        .map(|g| format!(" ({g})"))
        .unwrap_or_default();
    format!(
        "{}: {}{} - {} [{}]",
        scale.abbreviation, score, grade, calculation.interpretation, date
    )
}

/// Whole scores render without a decimal point.
fn format_score(raw: f64) -> String {
    if raw.fract() == 0.0 {
        format!("{raw:.0}")
    } else {
        format!("{raw}")
    }
}
