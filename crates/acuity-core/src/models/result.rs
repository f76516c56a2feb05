use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::response::ScaleResponses;
use super::scale::Severity;
use super::score::TriggeredAlert;

/// A persisted scale completion. Immutable once written — a new
/// completion produces a new record, not an update.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleResult {
    pub id: Uuid,
    pub scale_id: String,
    pub patient_id: String,
    pub visit_id: String,
    pub responses: ScaleResponses,
    pub raw_score: f64,
    pub interpretation: String,
    pub severity: Severity,
    pub grade: Option<String>,
    pub triggered_alerts: Vec<TriggeredAlert>,
    pub completed_at: jiff::Timestamp,
}
