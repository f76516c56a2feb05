use std::collections::BTreeMap;

use acuity_autofill::merge::apply_autofill;
use acuity_core::models::autofill::{AutofillAnnotation, AutofillResult, Confidence};
use acuity_core::models::response::{ResponseValue, ScaleResponses};

fn suggestion(entries: &[(&str, ResponseValue)]) -> AutofillResult {
    AutofillResult {
        scale_id: "cage".to_string(),
        responses: entries
            .iter()
            .map(|(id, v)| (id.to_string(), v.clone()))
            .collect(),
        annotations: BTreeMap::new(),
        missing_info: Vec::new(),
        suggested_prompts: Vec::new(),
    }
}

#[test]
fn merge_unions_new_answers() {
    let mut responses = ScaleResponses::new();
    responses.insert("cut_down".to_string(), ResponseValue::Bool(true));

    let result = suggestion(&[("annoyed", ResponseValue::Bool(false))]);
    apply_autofill(&mut responses, &result);

    assert_eq!(responses.len(), 2);
    assert_eq!(responses.get("cut_down"), Some(&ResponseValue::Bool(true)));
    assert_eq!(responses.get("annoyed"), Some(&ResponseValue::Bool(false)));
}

#[test]
fn merge_overwrites_manual_answers() {
    let mut responses = ScaleResponses::new();
    responses.insert("cut_down".to_string(), ResponseValue::Bool(false));

    let result = suggestion(&[("cut_down", ResponseValue::Bool(true))]);
    apply_autofill(&mut responses, &result);

    assert_eq!(responses.get("cut_down"), Some(&ResponseValue::Bool(true)));
}

#[test]
fn merge_is_idempotent() {
    let mut responses = ScaleResponses::new();
    let result = suggestion(&[
        ("cut_down", ResponseValue::Bool(true)),
        ("guilty", ResponseValue::Bool(false)),
    ]);

    apply_autofill(&mut responses, &result);
    let once = responses.clone();
    apply_autofill(&mut responses, &result);

    assert_eq!(responses, once);
}

#[test]
fn low_confidence_values_are_still_merged() {
    let mut responses = ScaleResponses::new();
    let mut result = suggestion(&[("eye_opener", ResponseValue::Bool(true))]);
    result.annotations.insert(
        "eye_opener".to_string(),
        AutofillAnnotation {
            confidence: Confidence::Low,
            reasoning: "note mentions morning drinking once, ambiguously".to_string(),
        },
    );

    apply_autofill(&mut responses, &result);

    assert_eq!(responses.get("eye_opener"), Some(&ResponseValue::Bool(true)));
}
