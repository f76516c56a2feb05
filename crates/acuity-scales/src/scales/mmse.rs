use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, Question, QuestionKind, ScaleCategory, ScaleDefinition,
    ScorePolarity, Severity, SeverityBand,
};

/// MMSE: Mini-Mental State Examination. Points awarded per section,
/// total 0–30. Higher scores are better.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| {
        let number = |id: &str, text: &str, max: f64| Question {
            id: id.to_string(),
            text: text.to_string(),
            help: Some(format!("Points awarded, 0\u{2013}{max}")),
            required: true,
            kind: QuestionKind::Number {
                min: 0.0,
                max,
                step: 1.0,
            },
        };

        ScaleDefinition {
            id: "mmse".to_string(),
            abbreviation: "MMSE".to_string(),
            name: "Mini-Mental State Examination".to_string(),
            description: "Cognitive screen across orientation, memory, attention, and language"
                .to_string(),
            category: ScaleCategory::Assessment,
            conditions: vec![
                ConditionTag {
                    label: "dementia".to_string(),
                    priority: 1,
                },
                ConditionTag {
                    label: "memory_loss".to_string(),
                    priority: 2,
                },
            ],
            required: true,
            polarity: ScorePolarity::HigherIsBetter,
            // A 2-point swing is within test-retest noise for the MMSE.
            stability_threshold: 3.0,
            questions: vec![
                number("orientation_time", "Orientation to time", 5.0),
                number("orientation_place", "Orientation to place", 5.0),
                number("registration", "Registration (three words)", 3.0),
                number("attention_calculation", "Attention and calculation (serial sevens)", 5.0),
                number("recall", "Delayed recall (three words)", 3.0),
                number("naming", "Naming (two objects)", 2.0),
                number("repetition", "Repetition of a sentence", 1.0),
                number("comprehension", "Three-stage command", 3.0),
                number("reading", "Reading and obeying a written command", 1.0),
                number("writing", "Writing a sentence", 1.0),
                number("drawing", "Copying intersecting pentagons", 1.0),
            ],
            bands: vec![
                SeverityBand {
                    min: 0.0,
                    max: 9.0,
                    severity: Severity::Severe,
                    interpretation: "Severe cognitive impairment".to_string(),
                    grade: None,
                    recommendations: vec!["Comprehensive dementia workup".to_string()],
                },
                SeverityBand {
                    min: 10.0,
                    max: 18.0,
                    severity: Severity::Moderate,
                    interpretation: "Moderate cognitive impairment".to_string(),
                    grade: None,
                    recommendations: vec!["Neuropsychological referral".to_string()],
                },
                SeverityBand {
                    min: 19.0,
                    max: 23.0,
                    severity: Severity::Mild,
                    interpretation: "Mild cognitive impairment".to_string(),
                    grade: None,
                    recommendations: vec!["Repeat MMSE in 6 months".to_string()],
                },
                SeverityBand {
                    min: 24.0,
                    max: 30.0,
                    severity: Severity::Minimal,
                    interpretation: "No cognitive impairment".to_string(),
                    grade: None,
                    recommendations: Vec::new(),
                },
            ],
            alert_rules: vec![AlertRule {
                kind: AlertKind::Warning,
                message: "MMSE below the impairment cutoff".to_string(),
                action: Some("Consider formal neuropsychological evaluation".to_string()),
                question_id: None,
                equals: None,
                min_weight: None,
                min_score: None,
                max_score: Some(23.0),
            }],
        }
    });
    &DEF
}
