use std::future::Future;
use std::pin::Pin;

use acuity_core::models::autofill::AutofillResult;
use acuity_core::models::patient::PatientContext;
use serde::{Deserialize, Serialize};

use crate::error::AutofillError;

/// An extraction request sent to the inference backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutofillRequest {
    pub scale_id: String,
    /// Free-text clinical narrative to extract answers from.
    pub clinical_text: String,
    pub patient: PatientContext,
}

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait implemented by autofill inference backends.
///
/// Methods return boxed futures for dyn compatibility. The session
/// layer never depends on a concrete backend — production wires in a
/// model-backed implementation, tests wire in scripted ones.
pub trait AutofillService: Send + Sync {
    /// Infer answers for the requested scale from the clinical text.
    fn extract(
        &self,
        request: AutofillRequest,
    ) -> BoxFuture<'_, Result<AutofillResult, AutofillError>>;
}
