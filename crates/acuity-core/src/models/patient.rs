use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The active patient/visit context. Changing it discards all in-memory
/// per-scale state; persisted results are the source of truth across
/// visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    pub patient_id: String,
    pub visit_id: String,
    /// Active condition labels driving scale relevance.
    pub conditions: Vec<String>,
    /// Short clinical summary forwarded to the autofill service.
    pub summary: Option<String>,
}
