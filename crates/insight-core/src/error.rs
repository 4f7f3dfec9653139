//! Error Types

use thiserror::Error;

/// Result type alias for submission operations
pub type Result<T> = std::result::Result<T, SubmitError>;

/// Reasons a submission attempt produces no navigation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// Field was empty or held only whitespace
    #[error("URL is empty")]
    EmptyInput,

    /// Navigation was already requested for this submission
    #[error("Submission already in flight")]
    InFlight,
}
