use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A clinician- or AI-supplied answer to one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ResponseValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl ResponseValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ResponseValue::Number(n) => Some(*n),
            ResponseValue::Text(s) => s.parse().ok(),
            ResponseValue::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResponseValue::Bool(b) => Some(*b),
            ResponseValue::Number(n) => Some(*n != 0.0),
            ResponseValue::Text(s) => match s.as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                _ => None,
            },
        }
    }
}

/// Answers keyed by question id; may be partial.
pub type ScaleResponses = BTreeMap<String, ResponseValue>;
