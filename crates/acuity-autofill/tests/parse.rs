use acuity_autofill::error::AutofillError;
use acuity_autofill::parse::parse_autofill_response;
use acuity_core::models::autofill::Confidence;
use acuity_core::models::response::ResponseValue;
use acuity_scales::scales::{cage, mmse, phq9};

#[test]
fn parses_plain_json() {
    let scale = phq9::definition();
    let reply = r#"{
        "responses": {"anhedonia": "2", "depressed_mood": "3"},
        "annotations": {
            "anhedonia": {"confidence": "high", "reasoning": "explicitly stated"}
        },
        "missing_info": ["sleep pattern not documented"],
        "suggested_prompts": ["Ask about sleep over the last two weeks"]
    }"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert_eq!(result.scale_id, "phq9");
    assert_eq!(
        result.responses.get("anhedonia"),
        Some(&ResponseValue::Text("2".to_string()))
    );
    assert_eq!(result.annotations["anhedonia"].confidence, Confidence::High);
    assert_eq!(result.missing_info.len(), 1);
    assert_eq!(result.suggested_prompts.len(), 1);
}

#[test]
fn strips_markdown_code_fences() {
    let scale = cage::definition();
    let reply = "```json\n{\"responses\": {\"cut_down\": true}}\n```";

    let result = parse_autofill_response(scale, reply).unwrap();

    assert_eq!(result.responses.get("cut_down"), Some(&ResponseValue::Bool(true)));
}

#[test]
fn drops_unknown_question_ids() {
    let scale = cage::definition();
    let reply = r#"{"responses": {"cut_down": true, "invented_item": true}}"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert_eq!(result.responses.len(), 1);
    assert!(!result.responses.contains_key("invented_item"));
}

#[test]
fn drops_values_outside_the_option_set() {
    let scale = phq9::definition();
    let reply = r#"{"responses": {"anhedonia": "7"}}"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert!(result.responses.is_empty());
}

#[test]
fn coerces_select_numbers_to_option_values() {
    let scale = phq9::definition();
    let reply = r#"{"responses": {"anhedonia": 2}}"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert_eq!(
        result.responses.get("anhedonia"),
        Some(&ResponseValue::Text("2".to_string()))
    );
}

#[test]
fn coerces_numeric_strings_for_number_questions() {
    let scale = mmse::definition();
    let reply = r#"{"responses": {"recall": "2"}}"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert_eq!(result.responses.get("recall"), Some(&ResponseValue::Number(2.0)));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let scale = cage::definition();
    let err = parse_autofill_response(scale, "the patient seems fine").unwrap_err();

    assert!(matches!(err, AutofillError::ResponseParse(_)));
}

#[test]
fn annotations_for_dropped_answers_are_discarded() {
    let scale = cage::definition();
    let reply = r#"{
        "responses": {"invented_item": true},
        "annotations": {
            "invented_item": {"confidence": "low", "reasoning": "guess"}
        }
    }"#;

    let result = parse_autofill_response(scale, reply).unwrap();

    assert!(result.responses.is_empty());
    assert!(result.annotations.is_empty());
}
