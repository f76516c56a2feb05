use thiserror::Error;

use acuity_autofill::error::AutofillError;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no patient context set")]
    NoPatientContext,

    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error(transparent)]
    Autofill(#[from] AutofillError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
