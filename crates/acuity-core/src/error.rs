use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("unknown question '{question_id}' for scale '{scale_id}'")]
    UnknownQuestion {
        scale_id: String,
        question_id: String,
    },

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
