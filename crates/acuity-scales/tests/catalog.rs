use acuity_core::models::scale::ScaleCategory;
use acuity_scales::scoring::validate_definition;
use acuity_scales::{
    all_scales, get_scale, scales_for_condition, scales_for_conditions, scales_in_category,
};

#[test]
fn condition_lookup_sorts_by_priority() {
    let ids: Vec<&str> = scales_for_condition("depression")
        .iter()
        .map(|s| s.id.as_str())
        .collect();

    // PHQ-9 is the primary depression instrument; GAD-7 and CAGE are
    // secondary screens.
    assert_eq!(ids, vec!["phq9", "gad7", "cage"]);
}

#[test]
fn unknown_condition_returns_empty_list() {
    assert!(scales_for_condition("no_such_condition").is_empty());
}

#[test]
fn duplicate_scales_keep_the_lowest_priority() {
    let labels = vec!["depression".to_string(), "alcohol_use".to_string()];
    let scales = scales_for_conditions(&labels);

    let cage_count = scales.iter().filter(|s| s.id == "cage").count();
    assert_eq!(cage_count, 1);

    // CAGE is reachable at priority 3 via depression and priority 1 via
    // alcohol_use; the lower priority wins, putting it ahead of GAD-7.
    let ids: Vec<&str> = scales.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["cage", "phq9", "gad7"]);
}

#[test]
fn empty_condition_list_is_valid() {
    assert!(scales_for_conditions(&[]).is_empty());
}

#[test]
fn examination_category_contains_gcs() {
    let ids: Vec<&str> = scales_in_category(ScaleCategory::Examination)
        .iter()
        .map(|s| s.id.as_str())
        .collect();
    assert_eq!(ids, vec!["gcs"]);
}

#[test]
fn get_scale_by_id() {
    assert_eq!(get_scale("nihss").map(|s| s.abbreviation.as_str()), Some("NIHSS"));
    assert!(get_scale("missing").is_none());
}

#[test]
fn every_registered_definition_is_sound() {
    for scale in all_scales() {
        let issues = validate_definition(scale);
        assert!(
            issues.is_empty(),
            "{} has definition issues: {issues:?}",
            scale.id
        );
    }
}

#[test]
fn score_ranges_match_published_instruments() {
    assert_eq!(get_scale("phq9").unwrap().score_range(), (0.0, 27.0));
    assert_eq!(get_scale("gad7").unwrap().score_range(), (0.0, 21.0));
    assert_eq!(get_scale("nihss").unwrap().score_range(), (0.0, 42.0));
    assert_eq!(get_scale("mmse").unwrap().score_range(), (0.0, 30.0));
    assert_eq!(get_scale("gcs").unwrap().score_range(), (3.0, 15.0));
    assert_eq!(get_scale("cage").unwrap().score_range(), (0.0, 4.0));
}
