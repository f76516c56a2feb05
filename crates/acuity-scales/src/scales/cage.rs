use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, Question, QuestionKind, ScaleCategory, ScaleDefinition,
    ScorePolarity, Severity, SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};

/// CAGE: four-item alcohol use screen. One point per positive answer;
/// two or more is a clinically significant screen.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| {
        let boolean = |id: &str, text: &str| Question {
            id: id.to_string(),
            text: text.to_string(),
            help: None,
            required: true,
            kind: QuestionKind::Boolean { weight: 1.0 },
        };

        ScaleDefinition {
            id: "cage".to_string(),
            abbreviation: "CAGE".to_string(),
            name: "CAGE Questionnaire".to_string(),
            description: "Four-item screen for alcohol use disorder".to_string(),
            category: ScaleCategory::Assessment,
            conditions: vec![
                ConditionTag {
                    label: "alcohol_use".to_string(),
                    priority: 1,
                },
                ConditionTag {
                    label: "depression".to_string(),
                    priority: 3,
                },
            ],
            required: false,
            polarity: ScorePolarity::LowerIsBetter,
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            questions: vec![
                boolean(
                    "cut_down",
                    "Have you ever felt you should cut down on your drinking?",
                ),
                boolean(
                    "annoyed",
                    "Have people annoyed you by criticizing your drinking?",
                ),
                boolean(
                    "guilty",
                    "Have you ever felt bad or guilty about your drinking?",
                ),
                boolean(
                    "eye_opener",
                    "Have you ever had a drink first thing in the morning to steady your nerves?",
                ),
            ],
            bands: vec![
                SeverityBand {
                    min: 0.0,
                    max: 1.0,
                    severity: Severity::Minimal,
                    interpretation: "Low likelihood of alcohol use disorder".to_string(),
                    grade: None,
                    recommendations: Vec::new(),
                },
                SeverityBand {
                    min: 2.0,
                    max: 4.0,
                    severity: Severity::Moderate,
                    interpretation: "Clinically significant screen".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Further evaluation for alcohol use disorder indicated".to_string(),
                    ],
                },
            ],
            alert_rules: vec![AlertRule {
                kind: AlertKind::Warning,
                message: "CAGE screen positive (2 or more)".to_string(),
                action: Some("Evaluate for alcohol use disorder".to_string()),
                question_id: None,
                equals: None,
                min_weight: None,
                min_score: Some(2.0),
                max_score: None,
            }],
        }
    });
    &DEF
}
