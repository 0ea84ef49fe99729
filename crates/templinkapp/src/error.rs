use crate::placeholders::naming::ValidationFailure;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TemplinkError {
    #[error("Content template not found: {0}")]
    TemplateNotFound(Uuid),

    #[error("URL template not found: {0}")]
    UrlTemplateNotFound(Uuid),

    #[error("Content record not found: {0}")]
    ContentNotFound(Uuid),

    #[error("Malformed stored data for content {record}: {reason}")]
    MalformedStoredData { record: Uuid, reason: String },

    #[error("{0}")]
    Validation(#[from] ValidationFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TemplinkError {
    /// True for every "referenced id does not resolve" failure.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TemplinkError::TemplateNotFound(_)
                | TemplinkError::UrlTemplateNotFound(_)
                | TemplinkError::ContentNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TemplinkError>;
