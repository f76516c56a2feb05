use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutofillError {
    /// Guarded precondition: the request is rejected client-side and
    /// never dispatched without narrative text to extract from.
    #[error("no clinical text available for autofill")]
    EmptyClinicalText,

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("failed to parse autofill response: {0}")]
    ResponseParse(String),
}
