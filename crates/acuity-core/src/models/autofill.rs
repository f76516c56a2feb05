use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::ScaleResponses;

/// Advisory certainty level attached to an AI-suggested answer.
/// Display metadata only — it never gates whether a value is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Per-question metadata accompanying an autofill suggestion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AutofillAnnotation {
    pub confidence: Confidence,
    pub reasoning: String,
}

/// AI-derived suggested answers extracted from free-text clinical
/// narrative, with per-question confidence and the gaps the model
/// could not fill.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AutofillResult {
    pub scale_id: String,
    pub responses: ScaleResponses,
    /// Keyed by question id; entries may be missing for inferred values.
    #[serde(default)]
    pub annotations: BTreeMap<String, AutofillAnnotation>,
    /// Information the model needed but could not find in the narrative.
    #[serde(default)]
    pub missing_info: Vec<String>,
    /// Clarifying questions for the clinician; passed through for display.
    #[serde(default)]
    pub suggested_prompts: Vec<String>,
}
