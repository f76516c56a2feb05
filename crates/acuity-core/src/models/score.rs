use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::scale::{AlertKind, Severity};

/// The derived score for one scale, recomputed on every answer change.
/// A pure function of `(ScaleDefinition, ScaleResponses)` — no hidden state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreCalculation {
    pub raw_score: f64,
    pub total_questions: usize,
    pub answered_questions: usize,
    /// True iff every required question has an answer.
    pub is_complete: bool,
    pub interpretation: String,
    pub severity: Severity,
    pub grade: Option<String>,
    pub recommendations: Vec<String>,
    pub triggered_alerts: Vec<TriggeredAlert>,
}

/// An alert raised by the scoring engine for display and note inclusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriggeredAlert {
    pub kind: AlertKind,
    pub message: String,
    pub action: Option<String>,
}
