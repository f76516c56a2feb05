use acuity_core::models::response::{ResponseValue, ScaleResponses};
use acuity_core::models::scale::{
    AlertKind, ConditionTag, Question, QuestionKind, ScaleCategory, ScaleDefinition,
    ScorePolarity, Severity, SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};
use acuity_scales::scoring::{calculate_score, validate_definition, DefinitionIssue};
use acuity_scales::scales::{gad7, gcs, mmse, phq9};

fn answer_all(scale: &ScaleDefinition, value: &str) -> ScaleResponses {
    scale
        .questions
        .iter()
        .map(|q| (q.id.clone(), ResponseValue::Text(value.to_string())))
        .collect()
}

#[test]
fn all_maximum_answers_resolve_highest_band() {
    let scale = phq9::definition();
    let responses = answer_all(scale, "3");

    let calc = calculate_score(scale, &responses);

    assert_eq!(calc.raw_score, 27.0);
    assert_eq!(calc.total_questions, 9);
    assert_eq!(calc.answered_questions, 9);
    assert!(calc.is_complete);
    assert_eq!(calc.severity, Severity::Critical);
    assert_eq!(calc.interpretation, "Severe depression");
}

#[test]
fn partial_answers_keep_scale_incomplete() {
    let scale = phq9::definition();
    let mut responses = ScaleResponses::new();
    for question in scale.questions.iter().take(3) {
        responses.insert(question.id.clone(), ResponseValue::Text("2".to_string()));
    }

    let calc = calculate_score(scale, &responses);

    assert!(!calc.is_complete);
    assert_eq!(calc.answered_questions, 3);
    assert_eq!(calc.total_questions, 9);
    assert_eq!(calc.raw_score, 6.0);
}

#[test]
fn calculation_is_deterministic() {
    let scale = gad7::definition();
    let responses = answer_all(scale, "2");

    let first = calculate_score(scale, &responses);
    let second = calculate_score(scale, &responses);

    assert_eq!(first, second);
}

#[test]
fn unknown_question_ids_are_ignored() {
    let scale = gad7::definition();
    let mut responses = answer_all(scale, "1");
    responses.insert(
        "not_a_question".to_string(),
        ResponseValue::Number(99.0),
    );

    let calc = calculate_score(scale, &responses);

    assert_eq!(calc.raw_score, 7.0);
    assert_eq!(calc.answered_questions, 7);
}

#[test]
fn optional_questions_never_block_completion() {
    let scale = scale_with_optional_question();
    let mut responses = ScaleResponses::new();
    responses.insert("required_item".to_string(), ResponseValue::Bool(true));

    let calc = calculate_score(&scale, &responses);

    assert!(calc.is_complete);
    assert_eq!(calc.answered_questions, 1);
    assert_eq!(calc.total_questions, 2);
}

#[test]
fn number_answers_are_clamped_to_bounds() {
    let scale = mmse::definition();
    let mut responses = ScaleResponses::new();
    for question in &scale.questions {
        responses.insert(question.id.clone(), ResponseValue::Number(0.0));
    }
    // Serial sevens is scored 0-5; a fat-fingered 9 clamps to 5.
    responses.insert(
        "attention_calculation".to_string(),
        ResponseValue::Number(9.0),
    );

    let calc = calculate_score(scale, &responses);

    assert_eq!(calc.raw_score, 5.0);
}

#[test]
fn score_outside_bands_degrades_to_undetermined() {
    let scale = scale_with_band_gap();
    let mut responses = ScaleResponses::new();
    responses.insert("item".to_string(), ResponseValue::Number(3.0));

    let calc = calculate_score(&scale, &responses);

    assert_eq!(calc.severity, Severity::Undetermined);
    assert_eq!(calc.interpretation, "Score outside defined ranges");
    assert!(calc.grade.is_none());
}

#[test]
fn fractional_band_gaps_are_detected() {
    let mut scale = scale_with_band_gap();
    // Half-point steps make 1.5 achievable; the bands cover every whole
    // point but leave that score unclassified.
    scale.questions = vec![Question {
        id: "item".to_string(),
        text: "Item".to_string(),
        help: None,
        required: true,
        kind: QuestionKind::Number {
            min: 0.0,
            max: 3.0,
            step: 0.5,
        },
    }];
    scale.bands = vec![
        SeverityBand {
            min: 0.0,
            max: 1.0,
            severity: Severity::Minimal,
            interpretation: "Low".to_string(),
            grade: None,
            recommendations: Vec::new(),
        },
        SeverityBand {
            min: 2.0,
            max: 3.0,
            severity: Severity::Moderate,
            interpretation: "High".to_string(),
            grade: None,
            recommendations: Vec::new(),
        },
    ];

    let issues = validate_definition(&scale);

    assert!(issues
        .iter()
        .any(|i| matches!(i, DefinitionIssue::BandGap { score, .. } if *score == 1.5)));
}

#[test]
fn self_harm_answer_alerts_before_scale_is_complete() {
    let scale = phq9::definition();
    let mut responses = ScaleResponses::new();
    responses.insert("self_harm".to_string(), ResponseValue::Text("2".to_string()));

    let calc = calculate_score(scale, &responses);

    assert!(!calc.is_complete);
    let critical: Vec<_> = calc
        .triggered_alerts
        .iter()
        .filter(|a| a.kind == AlertKind::Critical)
        .collect();
    assert_eq!(critical.len(), 1);
    assert!(critical[0].message.contains("self-harm"));
}

#[test]
fn score_threshold_alerts_wait_for_completion() {
    let scale = gad7::definition();

    // Five of seven items at maximum already sum past the threshold.
    let mut partial = ScaleResponses::new();
    for question in scale.questions.iter().take(5) {
        partial.insert(question.id.clone(), ResponseValue::Text("3".to_string()));
    }
    let calc = calculate_score(scale, &partial);
    assert_eq!(calc.raw_score, 15.0);
    assert!(calc.triggered_alerts.is_empty());

    let calc = calculate_score(scale, &answer_all(scale, "3"));
    assert!(calc.is_complete);
    assert_eq!(calc.triggered_alerts.len(), 1);
    assert_eq!(calc.triggered_alerts[0].kind, AlertKind::Warning);
}

#[test]
fn grade_is_resolved_from_the_band() {
    let scale = gcs::definition();
    let mut responses = ScaleResponses::new();
    responses.insert("eye_opening".to_string(), ResponseValue::Text("4".to_string()));
    responses.insert(
        "verbal_response".to_string(),
        ResponseValue::Text("5".to_string()),
    );
    responses.insert(
        "motor_response".to_string(),
        ResponseValue::Text("6".to_string()),
    );

    let calc = calculate_score(scale, &responses);

    assert_eq!(calc.raw_score, 15.0);
    assert_eq!(calc.grade.as_deref(), Some("Mild"));
    assert_eq!(calc.interpretation, "Mild or no impairment");
}

#[test]
fn alert_actions_feed_recommendations() {
    let scale = phq9::definition();
    let calc = calculate_score(scale, &answer_all(scale, "3"));

    assert!(calc
        .recommendations
        .iter()
        .any(|r| r.contains("suicide risk assessment")));
}

fn scale_with_optional_question() -> ScaleDefinition {
    ScaleDefinition {
        id: "test_scale".to_string(),
        abbreviation: "TEST".to_string(),
        name: "Test Scale".to_string(),
        description: String::new(),
        category: ScaleCategory::Assessment,
        conditions: vec![ConditionTag {
            label: "test".to_string(),
            priority: 1,
        }],
        required: false,
        polarity: ScorePolarity::LowerIsBetter,
        stability_threshold: DEFAULT_STABILITY_THRESHOLD,
        questions: vec![
            Question {
                id: "required_item".to_string(),
                text: "Required".to_string(),
                help: None,
                required: true,
                kind: QuestionKind::Boolean { weight: 1.0 },
            },
            Question {
                id: "optional_item".to_string(),
                text: "Optional".to_string(),
                help: None,
                required: false,
                kind: QuestionKind::Boolean { weight: 1.0 },
            },
        ],
        bands: vec![SeverityBand {
            min: 0.0,
            max: 2.0,
            severity: Severity::Minimal,
            interpretation: "Within range".to_string(),
            grade: None,
            recommendations: Vec::new(),
        }],
        alert_rules: Vec::new(),
    }
}

fn scale_with_band_gap() -> ScaleDefinition {
    let mut scale = scale_with_optional_question();
    scale.questions = vec![Question {
        id: "item".to_string(),
        text: "Item".to_string(),
        help: None,
        required: true,
        kind: QuestionKind::Number {
            min: 0.0,
            max: 5.0,
            step: 1.0,
        },
    }];
    // Deliberately leaves 3-5 uncovered.
    scale.bands = vec![SeverityBand {
        min: 0.0,
        max: 2.0,
        severity: Severity::Minimal,
        interpretation: "Low".to_string(),
        grade: None,
        recommendations: Vec::new(),
    }];
    scale
}
