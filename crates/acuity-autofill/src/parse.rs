//! Tolerant parsing of model extraction output.
//!
//! Models occasionally wrap JSON in markdown code fences despite
//! instructions; the parser strips those, then coerces each suggested
//! value to the question's variant and drops suggestions for question
//! ids the scale doesn't define.

use std::collections::BTreeMap;

use acuity_core::models::autofill::{AutofillAnnotation, AutofillResult};
use acuity_core::models::response::ResponseValue;
use acuity_core::models::scale::{QuestionKind, ScaleDefinition};
use serde::Deserialize;
use tracing::warn;

use crate::error::AutofillError;

#[derive(Debug, Deserialize)]
struct WireResult {
    #[serde(default)]
    responses: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    annotations: BTreeMap<String, AutofillAnnotation>,
    #[serde(default)]
    missing_info: Vec<String>,
    #[serde(default)]
    suggested_prompts: Vec<String>,
}

/// Parse a model reply into an [`AutofillResult`] for the given scale.
pub fn parse_autofill_response(
    scale: &ScaleDefinition,
    text: &str,
) -> Result<AutofillResult, AutofillError> {
    let body = strip_code_fences(text);

    let wire: WireResult = serde_json::from_str(body).map_err(|e| {
        AutofillError::ResponseParse(format!("invalid JSON: {e}. Response: {text}"))
    })?;

    let mut responses = BTreeMap::new();
    for (question_id, value) in wire.responses {
        let Some(question) = scale.question(&question_id) else {
            warn!(scale_id = %scale.id, question_id, "dropping suggestion for unknown question");
            continue;
        };
        match coerce(&question.kind, &value) {
            Some(coerced) => {
                responses.insert(question_id, coerced);
            }
            None => {
                warn!(
                    scale_id = %scale.id,
                    question_id,
                    %value,
                    "dropping suggestion that doesn't fit the question"
                );
            }
        }
    }

    let annotations = wire
        .annotations
        .into_iter()
        .filter(|(id, _)| responses.contains_key(id))
        .collect();

    Ok(AutofillResult {
        scale_id: scale.id.clone(),
        responses,
        annotations,
        missing_info: wire.missing_info,
        suggested_prompts: wire.suggested_prompts,
    })
}

/// Coerce a raw JSON value to the question's answer variant.
fn coerce(kind: &QuestionKind, value: &serde_json::Value) -> Option<ResponseValue> {
    match kind {
        QuestionKind::Select { options } | QuestionKind::Radio { options } => {
            let candidate = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                _ => return None,
            };
            options
                .iter()
                .any(|o| o.value == candidate)
                .then_some(ResponseValue::Text(candidate))
        }
        QuestionKind::Number { .. } => match value {
            serde_json::Value::Number(n) => n.as_f64().map(ResponseValue::Number),
            serde_json::Value::String(s) => s.parse().ok().map(ResponseValue::Number),
            _ => None,
        },
        QuestionKind::Boolean { .. } => match value {
            serde_json::Value::Bool(b) => Some(ResponseValue::Bool(*b)),
            serde_json::Value::String(s) => match s.as_str() {
                "true" | "yes" => Some(ResponseValue::Bool(true)),
                "false" | "no" => Some(ResponseValue::Bool(false)),
                _ => None,
            },
            _ => None,
        },
    }
}

/// Strip a leading/trailing markdown code fence if present.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the fence's info string ("json", etc.) up to the first newline.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
