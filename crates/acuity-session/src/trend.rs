//! Cross-visit trend annotation.

use acuity_core::models::result::ScaleResult;
use acuity_core::models::scale::{ScaleDefinition, ScorePolarity};
use acuity_core::models::score::ScoreCalculation;
use serde::Serialize;

/// Directional comparison of the current completed score against the
/// most recent prior persisted score for the same scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

/// Classify the current score against the prior result. Returns `None`
/// when there is no prior result or the current calculation is
/// incomplete. Read-only; never mutates persisted state.
pub fn trend(
    scale: &ScaleDefinition,
    current: &ScoreCalculation,
    prior: Option<&ScaleResult>,
) -> Option<Trend> {
    let prior = prior?;
    if !current.is_complete {
        return None;
    }

    let diff = current.raw_score - prior.raw_score;
    if diff.abs() < scale.stability_threshold {
        return Some(Trend::Stable);
    }

    let improved = match scale.polarity {
        ScorePolarity::LowerIsBetter => diff < 0.0,
        ScorePolarity::HigherIsBetter => diff > 0.0,
    };
    Some(if improved {
        Trend::Improving
    } else {
        Trend::Worsening
    })
}
