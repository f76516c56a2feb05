use std::path::PathBuf;

use acuity_session::config::{load_prefs_from, save_prefs_to, PrefsError, WorkspacePrefs};
use uuid::Uuid;

fn temp_prefs_path() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("acuity-prefs-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join("prefs.json")
}

#[test]
fn missing_file_yields_defaults() {
    let prefs = load_prefs_from(&temp_prefs_path()).unwrap();

    assert!(prefs.tab_order.is_empty());
    assert!(prefs.exam_template.is_none());
    assert!(!prefs.free_text_mode);
}

#[test]
fn save_then_load_round_trips() {
    let path = temp_prefs_path();
    let prefs = WorkspacePrefs {
        tab_order: vec!["phq9".to_string(), "gcs".to_string()],
        exam_template: Some("neuro".to_string()),
        free_text_mode: true,
        ..WorkspacePrefs::default()
    };

    save_prefs_to(&path, &prefs).unwrap();
    let loaded = load_prefs_from(&path).unwrap();

    assert_eq!(loaded.tab_order, prefs.tab_order);
    assert_eq!(loaded.exam_template.as_deref(), Some("neuro"));
    assert!(loaded.free_text_mode);
}

#[test]
fn pre_versioned_prefs_are_migrated() {
    let path = temp_prefs_path();
    std::fs::write(&path, r#"{"tab_order": ["gad7"], "exam_template": null}"#).unwrap();

    let loaded = load_prefs_from(&path).unwrap();

    assert_eq!(loaded.prefs_version, 1);
    assert_eq!(loaded.tab_order, vec!["gad7".to_string()]);
    assert!(!loaded.free_text_mode);
}

#[test]
fn newer_versions_are_rejected() {
    let path = temp_prefs_path();
    std::fs::write(&path, r#"{"prefs_version": 99}"#).unwrap();

    let err = load_prefs_from(&path).unwrap_err();
    assert!(matches!(err, PrefsError::VersionTooNew(99)));
}
