use std::sync::LazyLock;

use acuity_core::models::scale::{
    AlertKind, AlertRule, ConditionTag, ScaleCategory, ScaleDefinition, ScorePolarity, Severity,
    SeverityBand, DEFAULT_STABILITY_THRESHOLD,
};

use super::{option, select};

/// NIHSS: National Institutes of Health Stroke Scale.
/// 15 items with item-specific ratings. Total 0–42, higher is worse.
pub fn definition() -> &'static ScaleDefinition {
    static DEF: LazyLock<ScaleDefinition> = LazyLock::new(|| {
        let zero_to = |n: u32, labels: &[&str]| {
            (0..=n)
                .map(|i| option(&i.to_string(), labels[i as usize], f64::from(i)))
                .collect::<Vec<_>>()
        };

        let motor_labels = [
            "No drift",
            "Drift before 10 seconds",
            "Falls before 10 seconds",
            "No effort against gravity",
            "No movement",
        ];

        let questions = vec![
            select(
                "loc",
                "Level of consciousness",
                zero_to(3, &["Alert", "Not alert, arousable", "Not alert, obtunded", "Unresponsive"]),
            ),
            select(
                "loc_questions",
                "LOC questions (month, age)",
                zero_to(2, &["Both correct", "One correct", "Neither correct"]),
            ),
            select(
                "loc_commands",
                "LOC commands (close eyes, grip)",
                zero_to(2, &["Both performed", "One performed", "Neither performed"]),
            ),
            select(
                "best_gaze",
                "Best gaze",
                zero_to(2, &["Normal", "Partial gaze palsy", "Forced deviation"]),
            ),
            select(
                "visual_fields",
                "Visual fields",
                zero_to(3, &["No visual loss", "Partial hemianopia", "Complete hemianopia", "Bilateral hemianopia"]),
            ),
            select(
                "facial_palsy",
                "Facial palsy",
                zero_to(3, &["Normal", "Minor paralysis", "Partial paralysis", "Complete paralysis"]),
            ),
            select("motor_left_arm", "Motor: left arm", zero_to(4, &motor_labels)),
            select("motor_right_arm", "Motor: right arm", zero_to(4, &motor_labels)),
            select("motor_left_leg", "Motor: left leg", zero_to(4, &motor_labels)),
            select("motor_right_leg", "Motor: right leg", zero_to(4, &motor_labels)),
            select(
                "limb_ataxia",
                "Limb ataxia",
                zero_to(2, &["Absent", "Present in one limb", "Present in two limbs"]),
            ),
            select(
                "sensory",
                "Sensory",
                zero_to(2, &["Normal", "Mild-to-moderate loss", "Severe or total loss"]),
            ),
            select(
                "best_language",
                "Best language",
                zero_to(3, &["No aphasia", "Mild-to-moderate aphasia", "Severe aphasia", "Mute or global aphasia"]),
            ),
            select(
                "dysarthria",
                "Dysarthria",
                zero_to(2, &["Normal", "Mild-to-moderate", "Severe or anarthric"]),
            ),
            select(
                "extinction",
                "Extinction and inattention",
                zero_to(2, &["No abnormality", "Inattention to one modality", "Profound hemi-inattention"]),
            ),
        ];

        ScaleDefinition {
            id: "nihss".to_string(),
            abbreviation: "NIHSS".to_string(),
            name: "NIH Stroke Scale".to_string(),
            description: "Fifteen-item neurological examination quantifying stroke severity"
                .to_string(),
            category: ScaleCategory::Assessment,
            conditions: vec![
                ConditionTag {
                    label: "stroke".to_string(),
                    priority: 1,
                },
                ConditionTag {
                    label: "tia".to_string(),
                    priority: 2,
                },
            ],
            required: true,
            polarity: ScorePolarity::LowerIsBetter,
            stability_threshold: DEFAULT_STABILITY_THRESHOLD,
            questions,
            bands: vec![
                SeverityBand {
                    min: 0.0,
                    max: 0.0,
                    severity: Severity::Minimal,
                    interpretation: "No stroke symptoms".to_string(),
                    grade: None,
                    recommendations: Vec::new(),
                },
                SeverityBand {
                    min: 1.0,
                    max: 4.0,
                    severity: Severity::Mild,
                    interpretation: "Minor stroke".to_string(),
                    grade: None,
                    recommendations: Vec::new(),
                },
                SeverityBand {
                    min: 5.0,
                    max: 15.0,
                    severity: Severity::Moderate,
                    interpretation: "Moderate stroke".to_string(),
                    grade: None,
                    recommendations: vec!["Serial NIHSS monitoring".to_string()],
                },
                SeverityBand {
                    min: 16.0,
                    max: 20.0,
                    severity: Severity::Severe,
                    interpretation: "Moderate to severe stroke".to_string(),
                    grade: None,
                    recommendations: vec!["Stroke unit admission".to_string()],
                },
                SeverityBand {
                    min: 21.0,
                    max: 42.0,
                    severity: Severity::Critical,
                    interpretation: "Severe stroke".to_string(),
                    grade: None,
                    recommendations: vec!["Consider ICU-level monitoring".to_string()],
                },
            ],
            alert_rules: vec![
                AlertRule {
                    kind: AlertKind::Critical,
                    message: "NIHSS in the severe stroke range".to_string(),
                    action: Some("Escalate to stroke team".to_string()),
                    question_id: None,
                    equals: None,
                    min_weight: None,
                    min_score: Some(21.0),
                    max_score: None,
                },
                AlertRule {
                    kind: AlertKind::Warning,
                    message: "Depressed level of consciousness".to_string(),
                    action: Some("Reassess airway and arousal".to_string()),
                    question_id: Some("loc".to_string()),
                    equals: None,
                    min_weight: Some(2.0),
                    min_score: None,
                    max_score: None,
                },
            ],
        }
    });
    &DEF
}
