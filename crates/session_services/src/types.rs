use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The currently authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Email address of the user
    pub email: String,
}

/// Custom error type for session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The session backend could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The session backend answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// The response body could not be decoded
    #[error("Data format error: {0}")]
    DataFormat(String),
}
