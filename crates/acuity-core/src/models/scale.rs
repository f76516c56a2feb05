use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::response::ResponseValue;

/// Default stability threshold for trend comparison, in raw-score points.
pub const DEFAULT_STABILITY_THRESHOLD: f64 = 2.0;

/// A named, structured questionnaire with defined scoring rules
/// (e.g., a depression or stroke-severity instrument).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    /// Unique identifier (e.g., "phq9", "nihss").
    pub id: String,
    /// Short display form (e.g., "PHQ-9").
    pub abbreviation: String,
    pub name: String,
    pub description: String,
    pub category: ScaleCategory,
    /// Condition labels this scale applies to, each with its own
    /// relevance priority (lower = more relevant).
    pub conditions: Vec<ConditionTag>,
    /// Whether the scale must be completed for the visit note.
    pub required: bool,
    /// Which direction a score change counts as improvement.
    #[serde(default)]
    pub polarity: ScorePolarity,
    /// Raw-score delta below which a cross-visit change is "stable".
    #[serde(default = "default_stability_threshold")]
    pub stability_threshold: f64,
    pub questions: Vec<Question>,
    /// Ordered severity bands covering the achievable score range.
    pub bands: Vec<SeverityBand>,
    /// Rules that trigger alerts off scores or specific answers.
    #[serde(default)]
    pub alert_rules: Vec<AlertRule>,
}

fn default_stability_threshold() -> f64 {
    DEFAULT_STABILITY_THRESHOLD
}

/// Whether a scale belongs to the condition-driven assessment set or the
/// always-available examination set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScaleCategory {
    Assessment,
    Examination,
}

/// A condition label with a per-condition relevance priority.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConditionTag {
    pub label: String,
    /// Lower values sort first; ties break on scale id.
    pub priority: i32,
}

/// Scoring direction for trend comparison. Most clinical scales score
/// symptom burden, so lower is better by default; cognitive-screening
/// instruments (MMSE, GCS) reverse this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScorePolarity {
    #[default]
    LowerIsBetter,
    HigherIsBetter,
}

/// One scale item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub help: Option<String>,
    /// Optional questions never block completion.
    pub required: bool,
    pub kind: QuestionKind,
}

/// Question variant; determines how an answer contributes to the raw score.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    /// Dropdown over enumerated options; contributes the option weight.
    Select { options: Vec<QuestionOption> },
    /// Radio group over enumerated options; scored like `Select`.
    Radio { options: Vec<QuestionOption> },
    /// Bounded numeric entry; contributes the clamped value.
    Number { min: f64, max: f64, step: f64 },
    /// Yes/no; contributes `weight` when true, 0 when false.
    Boolean { weight: f64 },
}

impl QuestionKind {
    /// The highest raw-score contribution this question can make.
    pub fn max_contribution(&self) -> f64 {
        match self {
            QuestionKind::Select { options } | QuestionKind::Radio { options } => options
                .iter()
                .map(|o| o.weight)
                .fold(f64::NEG_INFINITY, f64::max),
            QuestionKind::Number { max, .. } => *max,
            QuestionKind::Boolean { weight } => *weight,
        }
    }

    /// The lowest raw-score contribution this question can make.
    pub fn min_contribution(&self) -> f64 {
        match self {
            QuestionKind::Select { options } | QuestionKind::Radio { options } => options
                .iter()
                .map(|o| o.weight)
                .fold(f64::INFINITY, f64::min),
            QuestionKind::Number { min, .. } => *min,
            QuestionKind::Boolean { .. } => 0.0,
        }
    }
}

/// An enumerated answer choice with its scoring weight.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
    pub weight: f64,
}

/// Classification severity for a band; drives display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
    Critical,
    /// Fallback when a score falls outside every defined band.
    Undetermined,
}

/// A non-overlapping score range mapped to an interpretation.
/// `min` and `max` are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: f64,
    pub max: f64,
    pub severity: Severity,
    pub interpretation: String,
    pub grade: Option<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl SeverityBand {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertKind {
    Warning,
    Critical,
}

/// A rule that raises an alert when every present condition holds.
///
/// Conditions compose as a conjunction: a rule keyed off a question can
/// additionally require a score threshold (e.g. a specific boolean flag
/// plus a raw score floor). A rule with no conditions never fires;
/// `validate_definition` flags such rules.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlertRule {
    pub kind: AlertKind,
    pub message: String,
    pub action: Option<String>,
    /// Question whose answer participates in the condition.
    pub question_id: Option<String>,
    /// Fires only when the answer equals this value exactly.
    pub equals: Option<ResponseValue>,
    /// Fires only when the answer's score contribution is at least this.
    pub min_weight: Option<f64>,
    /// Fires only when the raw score is at least this.
    pub min_score: Option<f64>,
    /// Fires only when the raw score is at most this.
    pub max_score: Option<f64>,
}

impl ScaleDefinition {
    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// The lowest and highest achievable raw scores, assuming every
    /// question is answered.
    pub fn score_range(&self) -> (f64, f64) {
        let min = self
            .questions
            .iter()
            .map(|q| q.kind.min_contribution())
            .sum();
        let max = self
            .questions
            .iter()
            .map(|q| q.kind.max_contribution())
            .sum();
        (min, max)
    }
}
