use acuity_core::models::response::{ResponseValue, ScaleResponses};
use acuity_core::models::scale::{Question, QuestionKind, ScaleDefinition, Severity};
use acuity_core::models::score::{ScoreCalculation, TriggeredAlert};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;

/// Compute the score and classification for a scale given a (possibly
/// partial) answer set. Pure and deterministic; unknown question ids in
/// `responses` are ignored.
pub fn calculate_score(scale: &ScaleDefinition, responses: &ScaleResponses) -> ScoreCalculation {
    let total_questions = scale.questions.len();
    let mut answered_questions = 0;
    let mut raw_score = 0.0;

    for question in &scale.questions {
        if let Some(value) = responses.get(&question.id) {
            answered_questions += 1;
            raw_score += contribution(question, value);
        }
    }

    let is_complete = scale
        .questions
        .iter()
        .filter(|q| q.required)
        .all(|q| responses.contains_key(&q.id));

    let band = scale.bands.iter().find(|b| b.contains(raw_score));

    let (interpretation, severity, grade, mut recommendations) = match band {
        Some(band) => (
            band.interpretation.clone(),
            band.severity,
            band.grade.clone(),
            band.recommendations.clone(),
        ),
        // Tolerate malformed definitions rather than failing.
        None => (
            "Score outside defined ranges".to_string(),
            Severity::Undetermined,
            None,
            Vec::new(),
        ),
    };

    let triggered_alerts = evaluate_alerts(scale, responses, raw_score, is_complete);
    for alert in &triggered_alerts {
        if let Some(action) = &alert.action
            && !recommendations.contains(action)
        {
            recommendations.push(action.clone());
        }
    }

    ScoreCalculation {
        raw_score,
        total_questions,
        answered_questions,
        is_complete,
        interpretation,
        severity,
        grade,
        recommendations,
        triggered_alerts,
    }
}

/// The raw-score contribution of one answer, per the question variant:
/// option weight for select/radio, the clamped value for number, the
/// question weight (or 0) for boolean. Answers that don't fit the
/// variant contribute 0 but still count as answered.
pub fn contribution(question: &Question, value: &ResponseValue) -> f64 {
    match &question.kind {
        QuestionKind::Select { options } | QuestionKind::Radio { options } => match value {
            ResponseValue::Text(s) => options
                .iter()
                .find(|o| o.value == *s)
                .map(|o| o.weight)
                .unwrap_or(0.0),
            ResponseValue::Number(n) => options
                .iter()
                .find(|o| o.value.parse::<f64>().ok() == Some(*n))
                .map(|o| o.weight)
                .unwrap_or(0.0),
            ResponseValue::Bool(_) => 0.0,
        },
        QuestionKind::Number { min, max, .. } => value
            .as_number()
            .map(|n| n.clamp(*min, *max))
            .unwrap_or(0.0),
        QuestionKind::Boolean { weight } => {
            if value.as_bool().unwrap_or(false) {
                *weight
            } else {
                0.0
            }
        }
    }
}

/// Evaluate alert rules against the current answers and raw score.
///
/// Question-keyed conditions fire as soon as the answer is present
/// (a positive self-harm item should not wait for the rest of the
/// scale). Score thresholds only apply once the scale is complete, so a
/// half-filled scale can't trip a score alert on a meaningless partial
/// sum.
fn evaluate_alerts(
    scale: &ScaleDefinition,
    responses: &ScaleResponses,
    raw_score: f64,
    is_complete: bool,
) -> Vec<TriggeredAlert> {
    let mut triggered = Vec::new();

    for rule in &scale.alert_rules {
        let mut applicable = false;
        let mut holds = true;

        if let Some(question_id) = &rule.question_id {
            applicable = true;
            match (responses.get(question_id), scale.question(question_id)) {
                (Some(value), Some(question)) => {
                    if let Some(expected) = &rule.equals {
                        holds &= value == expected;
                    }
                    if let Some(min_weight) = rule.min_weight {
                        holds &= contribution(question, value) >= min_weight;
                    }
                }
                _ => holds = false,
            }
        }

        if let Some(min_score) = rule.min_score {
            applicable = true;
            holds &= is_complete && raw_score >= min_score;
        }
        if let Some(max_score) = rule.max_score {
            applicable = true;
            holds &= is_complete && raw_score <= max_score;
        }

        if applicable && holds {
            triggered.push(TriggeredAlert {
                kind: rule.kind,
                message: rule.message.clone(),
                action: rule.action.clone(),
            });
        }
    }

    triggered
}

/// A structural defect found in a scale definition.
#[derive(Debug, Clone, Serialize, TS, Error)]
#[ts(export)]
pub enum DefinitionIssue {
    #[error("{scale_id}: no severity bands defined")]
    NoBands { scale_id: String },

    #[error("{scale_id}: no band covers achievable score {score}")]
    BandGap { scale_id: String, score: f64 },

    #[error("{scale_id}: {count} bands overlap at score {score}")]
    BandOverlap {
        scale_id: String,
        score: f64,
        count: usize,
    },

    #[error("{scale_id}: question '{question_id}' has no options")]
    EmptyOptions {
        scale_id: String,
        question_id: String,
    },

    #[error("{scale_id}: alert rule '{message}' references unknown question '{question_id}'")]
    UnknownAlertQuestion {
        scale_id: String,
        question_id: String,
        message: String,
    },

    #[error("{scale_id}: alert rule '{message}' has no conditions and can never fire")]
    InertAlertRule { scale_id: String, message: String },
}

/// Validate a scale definition's scoring rules: severity bands must be
/// exhaustive and non-overlapping at unit granularity across the
/// achievable score range, option lists non-empty, and alert rules
/// well-formed. Returns all issues found; an empty vec means the
/// definition is sound.
pub fn validate_definition(scale: &ScaleDefinition) -> Vec<DefinitionIssue> {
    let mut issues = Vec::new();

    if scale.bands.is_empty() {
        issues.push(DefinitionIssue::NoBands {
            scale_id: scale.id.clone(),
        });
    }

    for question in &scale.questions {
        if let QuestionKind::Select { options } | QuestionKind::Radio { options } = &question.kind
            && options.is_empty()
        {
            issues.push(DefinitionIssue::EmptyOptions {
                scale_id: scale.id.clone(),
                question_id: question.id.clone(),
            });
        }
    }

    if !scale.bands.is_empty() {
        let (range_min, range_max) = scale.score_range();
        let granularity = score_granularity(scale);
        let steps = ((range_max - range_min) / granularity).round() as usize;
        for i in 0..=steps {
            let score = range_min + i as f64 * granularity;
            let covering = scale.bands.iter().filter(|b| b.contains(score)).count();
            match covering {
                0 => issues.push(DefinitionIssue::BandGap {
                    scale_id: scale.id.clone(),
                    score,
                }),
                1 => {}
                count => issues.push(DefinitionIssue::BandOverlap {
                    scale_id: scale.id.clone(),
                    score,
                    count,
                }),
            }
        }
    }

    for rule in &scale.alert_rules {
        if let Some(question_id) = &rule.question_id {
            if scale.question(question_id).is_none() {
                issues.push(DefinitionIssue::UnknownAlertQuestion {
                    scale_id: scale.id.clone(),
                    question_id: question_id.clone(),
                    message: rule.message.clone(),
                });
            }
        } else if rule.min_score.is_none() && rule.max_score.is_none() {
            issues.push(DefinitionIssue::InertAlertRule {
                scale_id: scale.id.clone(),
                message: rule.message.clone(),
            });
        }
    }

    issues
}

/// The finest score increment the scale's questions can produce. Band
/// coverage is sampled at this granularity so a fractional-step number
/// question can't hide a gap between whole points.
fn score_granularity(scale: &ScaleDefinition) -> f64 {
    scale
        .questions
        .iter()
        .filter_map(|q| match &q.kind {
            QuestionKind::Number { step, .. } if *step > 0.0 => Some(*step),
            _ => None,
        })
        .fold(1.0, f64::min)
}
