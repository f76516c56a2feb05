use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, ScaleCategory, ScaleDefinition, ScorePolarity, Severity,
    SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};

use super::{option, select};

/// GCS: Glasgow Coma Scale. Eye, verbal, and motor components summed to
/// 3–15. Higher scores are better. Examination category — always
/// offered regardless of condition labels.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| ScaleDefinition {
        id: "gcs".to_string(),
        abbreviation: "GCS".to_string(),
        name: "Glasgow Coma Scale".to_string(),
        description: "Level-of-consciousness examination across eye, verbal, and motor responses"
            .to_string(),
        category: ScaleCategory::Examination,
        conditions: vec![
            ConditionTag {
                label: "trauma".to_string(),
                priority: 1,
            },
            ConditionTag {
                label: "head_injury".to_string(),
                priority: 1,
            },
        ],
        required: false,
        polarity: ScorePolarity::HigherIsBetter,
        stability_threshold: DEFAULT_STABILITY_THRESHOLD,
        questions: vec![
            select(
                "eye_opening",
                "Eye opening response",
                vec![
                    option("1", "None", 1.0),
                    option("2", "To pain", 2.0),
                    option("3", "To speech", 3.0),
                    option("4", "Spontaneous", 4.0),
                ],
            ),
            select(
                "verbal_response",
                "Verbal response",
                vec![
                    option("1", "None", 1.0),
                    option("2", "Incomprehensible sounds", 2.0),
                    option("3", "Inappropriate words", 3.0),
                    option("4", "Confused", 4.0),
                    option("5", "Oriented", 5.0),
                ],
            ),
            select(
                "motor_response",
                "Motor response",
                vec![
                    option("1", "None", 1.0),
                    option("2", "Extension to pain", 2.0),
                    option("3", "Abnormal flexion", 3.0),
                    option("4", "Withdrawal from pain", 4.0),
                    option("5", "Localizes pain", 5.0),
                    option("6", "Obeys commands", 6.0),
                ],
            ),
        ],
        bands: vec![
            SeverityBand {
                min: 3.0,
                max: 8.0,
                severity: Severity::Critical,
                interpretation: "Severe impairment of consciousness".to_string(),
                grade: Some("Severe".to_string()),
                recommendations: vec!["Continuous neurological observation".to_string()],
            },
            SeverityBand {
                min: 9.0,
                max: 12.0,
                severity: Severity::Moderate,
                interpretation: "Moderate impairment of consciousness".to_string(),
                grade: Some("Moderate".to_string()),
                recommendations: vec!["Frequent neurological checks".to_string()],
            },
            SeverityBand {
                min: 13.0,
                max: 15.0,
                severity: Severity::Minimal,
                interpretation: "Mild or no impairment".to_string(),
                grade: Some("Mild".to_string()),
                recommendations: Vec::new(),
            },
        ],
        alert_rules: vec![AlertRule {
            kind: AlertKind::Critical,
            message: "GCS of 8 or below".to_string(),
            action: Some("Airway protection may be required".to_string()),
            question_id: None,
            equals: None,
            min_weight: None,
            min_score: None,
            max_score: Some(8.0),
        }],
    });
    &DEF
}
