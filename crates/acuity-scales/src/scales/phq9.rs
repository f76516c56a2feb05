use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, ScaleCategory, ScaleDefinition, ScorePolarity, Severity,
    SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};

use super::{frequency_options, select};

/// PHQ-9: Patient Health Questionnaire, 9 items.
/// Each item rated 0–3 over the last two weeks. Total 0–27.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| {
        let items = [
            ("anhedonia", "Little interest or pleasure in doing things"),
            ("depressed_mood", "Feeling down, depressed, or hopeless"),
            (
                "sleep",
                "Trouble falling or staying asleep, or sleeping too much",
            ),
            ("fatigue", "Feeling tired or having little energy"),
            ("appetite", "Poor appetite or overeating"),
            (
                "self_worth",
                "Feeling bad about yourself, or that you are a failure",
            ),
            (
                "concentration",
                "Trouble concentrating on things, such as reading or television",
            ),
            (
                "psychomotor",
                "Moving or speaking noticeably slowly, or being fidgety or restless",
            ),
            (
                "self_harm",
                "Thoughts that you would be better off dead, or of hurting yourself",
            ),
        ];

        ScaleDefinition {
            id: "phq9".to_string(),
            abbreviation: "PHQ-9".to_string(),
            name: "Patient Health Questionnaire-9".to_string(),
            description: "Nine-item depression severity screen scored over the last two weeks"
                .to_string(),
            category: ScaleCategory::Assessment,
            conditions: vec![
                ConditionTag {
                    label: "depression".to_string(),
                    priority: 1,
                },
                ConditionTag {
                    label: "chronic_pain".to_string(),
                    priority: 3,
                },
            ],
            required: true,
            polarity: ScorePolarity::LowerIsBetter,
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            questions: items
                .iter()
                .map(|(id, text)| select(id, text, frequency_options()))
                .collect(),
            bands: vec![
                SeverityBand {
                    min: 0.0,
                    max: 4.0,
                    severity: Severity::Minimal,
                    interpretation: "Minimal depression".to_string(),
                    grade: None,
                    recommendations: vec!["Monitor; repeat PHQ-9 at next visit".to_string()],
                },
                SeverityBand {
                    min: 5.0,
                    max: 9.0,
                    severity: Severity::Mild,
                    interpretation: "Mild depression".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Watchful waiting; repeat screening in 2-4 weeks".to_string()
                    ],
                },
                SeverityBand {
                    min: 10.0,
                    max: 14.0,
                    severity: Severity::Moderate,
                    interpretation: "Moderate depression".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Consider counseling and/or pharmacotherapy".to_string()
                    ],
                },
                SeverityBand {
                    min: 15.0,
                    max: 19.0,
                    severity: Severity::Severe,
                    interpretation: "Moderately severe depression".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Active treatment with pharmacotherapy and/or psychotherapy".to_string(),
                    ],
                },
                SeverityBand {
                    min: 20.0,
                    max: 27.0,
                    severity: Severity::Critical,
                    interpretation: "Severe depression".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Initiate pharmacotherapy; expedite behavioral health referral"
                            .to_string(),
                    ],
                },
            ],
            alert_rules: vec![
                AlertRule {
                    kind: AlertKind::Critical,
                    message: "Positive response to self-harm item".to_string(),
                    action: Some(
                        "Conduct suicide risk assessment before the patient leaves".to_string(),
                    ),
                    question_id: Some("self_harm".to_string()),
                    equals: None,
                    min_weight: Some(1.0),
                    min_score: None,
                    max_score: None,
                },
                AlertRule {
                    kind: AlertKind::Warning,
                    message: "PHQ-9 score in the severe range".to_string(),
                    action: Some("Consider psychiatric referral".to_string()),
                    question_id: None,
                    equals: None,
                    min_weight: None,
                    min_score: Some(20.0),
                    max_score: None,
                },
            ],
        }
    });
    &DEF
}
