//! Error types for projection inputs and goal loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

impl ProjectionError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ProjectionError::InvalidArgument(msg.into())
    }
}
