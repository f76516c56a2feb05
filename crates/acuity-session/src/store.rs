//! Persistence seam for scale results.

use std::future::Future;
use std::pin::Pin;

use acuity_core::models::response::ScaleResponses;
use acuity_core::models::result::ScaleResult;
use acuity_core::models::scale::Severity;
use acuity_core::models::score::TriggeredAlert;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("result not found: {0}")]
    NotFound(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Payload for a result write. The store assigns the record id and
/// completion timestamp and returns the canonical [`ScaleResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRequest {
    pub patient_id: String,
    pub visit_id: String,
    pub scale_id: String,
    pub responses: ScaleResponses,
    pub raw_score: f64,
    pub interpretation: String,
    pub severity: Severity,
    pub grade: Option<String>,
    pub triggered_alerts: Vec<TriggeredAlert>,
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait implemented by scale-result persistence backends.
///
/// Methods return boxed futures for dyn compatibility. Persisted
/// results are immutable; a new completion writes a new record.
pub trait ResultStore: Send + Sync {
    /// The patient's persisted results, newest first, optionally capped.
    fn fetch_history(
        &self,
        patient_id: &str,
        limit: Option<usize>,
    ) -> BoxFuture<'_, Result<Vec<ScaleResult>, StoreError>>;

    /// Persist one completed scale and return the canonical record.
    fn save_result(&self, request: SaveRequest) -> BoxFuture<'_, Result<ScaleResult, StoreError>>;
}
