//! Per-scale definition modules. Each exposes a `definition()` returning
//! a static [`ScaleDefinition`] built once on first use.

pub mod cage;
pub mod gad7;
pub mod gcs;
pub mod mmse;
pub mod nihss;
pub mod phq9;

use acuity_core::models::scale::{Question, QuestionKind, QuestionOption};

pub(crate) fn option(value: &str, label: &str, weight: f64) -> QuestionOption {
    QuestionOption {
        value: value.to_string(),
        label: label.to_string(),
        weight,
    }
}

pub(crate) fn select(id: &str, text: &str, options: Vec<QuestionOption>) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        help: None,
        required: true,
        kind: QuestionKind::Select { options },
    }
}

/// The 0–3 "over the last 2 weeks" frequency options shared by the
/// PHQ-9 and GAD-7.
pub(crate) fn frequency_options() -> Vec<QuestionOption> {
    vec![
        option("0", "Not at all", 0.0),
        option("1", "Several days", 1.0),
        option("2", "More than half the days", 2.0),
        option("3", "Nearly every day", 3.0),
    ]
}
