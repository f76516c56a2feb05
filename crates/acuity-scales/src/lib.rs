//! acuity-scales
//!
//! Clinical scale definitions and the pure scoring engine. Defines the
//! questions, severity bands, and alert rules for each supported scale,
//! and maps a set of answers to a score and classification. No I/O.

pub mod scales;
pub mod scoring;

use acuity_core::models::scale::{ScaleCategory, ScaleDefinition};

/// Return all registered scale definitions.
pub fn all_scales() -> Vec<&'static ScaleDefinition> {
    vec![
        scales::phq9::definition(),
        scales::gad7::definition(),
        scales::nihss::definition(),
        scales::mmse::definition(),
        scales::cage::definition(),
        scales::gcs::definition(),
    ]
}

/// Look up a scale by ID.
pub fn get_scale(id: &str) -> Option<&'static ScaleDefinition> {
    all_scales().into_iter().find(|s| s.id == id)
}

/// All scales in a fixed examination category. Unordered.
pub fn scales_in_category(category: ScaleCategory) -> Vec<&'static ScaleDefinition> {
    all_scales()
        .into_iter()
        .filter(|s| s.category == category)
        .collect()
}

/// Scales applicable to a single condition label, sorted ascending by
/// that condition's priority (ties break on scale id). Unknown labels
/// return an empty list.
pub fn scales_for_condition(label: &str) -> Vec<&'static ScaleDefinition> {
    let mut matched: Vec<(i32, &'static ScaleDefinition)> = all_scales()
        .into_iter()
        .filter_map(|s| {
            s.conditions
                .iter()
                .find(|c| c.label == label)
                .map(|c| (c.priority, s))
        })
        .collect();
    matched.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
    matched.into_iter().map(|(_, s)| s).collect()
}

/// Scales applicable to any of the given condition labels. When a scale
/// is reachable from multiple labels, the lowest (most relevant)
/// priority wins and duplicates are dropped. Sorted ascending by that
/// winning priority, ties on scale id.
pub fn scales_for_conditions(labels: &[String]) -> Vec<&'static ScaleDefinition> {
    let mut best: Vec<(i32, &'static ScaleDefinition)> = Vec::new();

    for scale in all_scales() {
        let priority = scale
            .conditions
            .iter()
            .filter(|c| labels.iter().any(|l| l == &c.label))
            .map(|c| c.priority)
            .min();
        if let Some(priority) = priority {
            best.push((priority, scale));
        }
    }

    best.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
    best.into_iter().map(|(_, s)| s).collect()
}
