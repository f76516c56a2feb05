//! Workspace preferences: tab order, examination template, free-text
//! mode. An explicit configuration object with defined load/save
//! boundaries rather than ambient process-wide state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current prefs version. Bump this when adding fields or changing
/// shape. Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspacePrefs {
    /// Schema version. Missing or 0 = pre-versioned prefs.
    #[serde(default)]
    pub prefs_version: u32,
    /// Scale section tab order, by scale id.
    #[serde(default)]
    pub tab_order: Vec<String>,
    /// Preferred examination template id.
    #[serde(default)]
    pub exam_template: Option<String>,
    /// Whether scale results are entered as free text instead of
    /// structured questions. Added in v1.
    #[serde(default)]
    pub free_text_mode: bool,
}

impl Default for WorkspacePrefs {
    fn default() -> Self {
        Self {
            prefs_version: CURRENT_VERSION,
            tab_order: Vec::new(),
            exam_template: None,
            free_text_mode: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("no config directory found")]
    NoConfigDir,

    #[error("prefs file is not a JSON object")]
    Malformed,

    #[error("prefs_version {0} is newer than this build supports ({CURRENT_VERSION})")]
    VersionTooNew(u32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

fn prefs_dir() -> Result<PathBuf, PrefsError> {
    let base = dirs::config_dir().ok_or(PrefsError::NoConfigDir)?;
    Ok(base.join("com.acuity.clinic"))
}

pub fn prefs_path() -> Result<PathBuf, PrefsError> {
    Ok(prefs_dir()?.join("prefs.json"))
}

pub fn load_prefs() -> Result<WorkspacePrefs, PrefsError> {
    load_prefs_from(&prefs_path()?)
}

/// Load prefs from an explicit path, running migrations as needed.
/// A missing file yields defaults.
pub fn load_prefs_from(path: &Path) -> Result<WorkspacePrefs, PrefsError> {
    if !path.exists() {
        return Ok(WorkspacePrefs::default());
    }
    let contents = std::fs::read_to_string(path)?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("prefs_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let prefs: WorkspacePrefs = serde_json::from_value(migrated)?;
    Ok(prefs)
}

/// Run sequential migrations from `from_version` up to
/// [`CURRENT_VERSION`]. Each migration is a pure transform on the raw
/// JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> Result<serde_json::Value, PrefsError> {
    if from_version > CURRENT_VERSION {
        return Err(PrefsError::VersionTooNew(from_version));
    }

    // v0 → v1: add free_text_mode (defaults to structured entry)
    if from_version < 1 {
        let obj = json.as_object_mut().ok_or(PrefsError::Malformed)?;
        obj.entry("free_text_mode")
            .or_insert(serde_json::Value::Bool(false));
        obj.insert(
            "prefs_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated prefs v0 → v1 (added free_text_mode)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_prefs(prefs: &WorkspacePrefs) -> Result<(), PrefsError> {
    let dir = prefs_dir()?;
    std::fs::create_dir_all(&dir)?;
    save_prefs_to(&dir.join("prefs.json"), prefs)
}

/// Save prefs to an explicit path, stamped with the current version.
pub fn save_prefs_to(path: &Path, prefs: &WorkspacePrefs) -> Result<(), PrefsError> {
    let mut stamped = prefs.clone();
    stamped.prefs_version = CURRENT_VERSION;

    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "prefs saved");
    Ok(())
}
