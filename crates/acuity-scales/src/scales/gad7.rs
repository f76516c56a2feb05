use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, ScaleCategory, ScaleDefinition, ScorePolarity, Severity,
    SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};

use super::{frequency_options, select};

/// GAD-7: Generalized Anxiety Disorder scale, 7 items rated 0–3.
/// Total 0–21.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| {
        let items = [
            ("nervousness", "Feeling nervous, anxious, or on edge"),
            (
                "worry_control",
                "Not being able to stop or control worrying",
            ),
            ("excessive_worry", "Worrying too much about different things"),
            ("trouble_relaxing", "Trouble relaxing"),
            (
                "restlessness",
                "Being so restless that it is hard to sit still",
            ),
            ("irritability", "Becoming easily annoyed or irritable"),
            (
                "fear_of_awful",
                "Feeling afraid as if something awful might happen",
            ),
        ];

        ScaleDefinition {
            id: "gad7".to_string(),
            abbreviation: "GAD-7".to_string(),
            name: "Generalized Anxiety Disorder-7".to_string(),
            description: "Seven-item anxiety severity screen scored over the last two weeks"
                .to_string(),
            category: ScaleCategory::Assessment,
            conditions: vec![
                ConditionTag {
                    label: "anxiety".to_string(),
                    priority: 1,
                },
                ConditionTag {
                    label: "depression".to_string(),
                    priority: 2,
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
                    interpretation: "Minimal anxiety".to_string(),
                    grade: None,
                    recommendations: vec!["No intervention indicated".to_string()],
                },
                SeverityBand {
                    min: 5.0,
                    max: 9.0,
                    severity: Severity::Mild,
                    interpretation: "Mild anxiety".to_string(),
                    grade: None,
                    recommendations: vec!["Monitor; repeat GAD-7 at follow-up".to_string()],
                },
                SeverityBand {
                    min: 10.0,
                    max: 14.0,
                    severity: Severity::Moderate,
                    interpretation: "Moderate anxiety".to_string(),
                    grade: None,
                    recommendations: vec![
                        "Consider counseling and/or pharmacotherapy".to_string()
                    ],
                },
                SeverityBand {
                    min: 15.0,
                    max: 21.0,
                    severity: Severity::Severe,
                    interpretation: "Severe anxiety".to_string(),
                    grade: None,
                    recommendations: vec!["Active treatment warranted".to_string()],
                },
            ],
            alert_rules: vec![AlertRule {
                kind: AlertKind::Warning,
                message: "GAD-7 score in the severe range".to_string(),
                action: Some("Consider behavioral health referral".to_string()),
                question_id: None,
                equals: None,
                min_weight: None,
                min_score: Some(15.0),
                max_score: None,
            }],
        }
    });
    &DEF
}
