/// Core error types for Folio
use thiserror::Error;

/// Result type alias using `FolioError`
pub type Result<T> = std::result::Result<T, FolioError>;

/// Core error type for Folio
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Category label outside the fixed set
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Experience kind label outside the fixed set
    #[error("Unknown experience kind: {0}")]
    UnknownExperienceKind(String),

    /// A required contact field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A submission was attempted while another one is outstanding
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The contact boundary rejected or failed to deliver a message
    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl FolioError {
    /// Create a delivery error
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }
}
