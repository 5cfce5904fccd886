use places::{MapBounds, PlaceType};
use serde::Serialize;
use validator::Validate;

/// Query sent to the external search provider.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct SearchRequest {
    /// Free-text search entered by the user
    #[validate(length(min = 1, max = 255, message = "Search text is required"))]
    pub text: String,

    /// Which place type to search
    pub place_type: PlaceType,

    /// Viewport bounds restricting the search, when the map filter is on
    pub bounds: Option<MapBounds>,
}

impl SearchRequest {
    /// Builds a request for the given text, place type, and optional bounds.
    pub fn new(text: impl Into<String>, place_type: PlaceType, bounds: Option<MapBounds>) -> Self {
        Self {
            text: text.into(),
            place_type,
            bounds,
        }
    }
}

/// Custom error type for search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request failed validation before dispatch
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider could not be reached
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// Rate limited by the search provider
    #[error("Rate limited by search provider")]
    RateLimited,

    /// Authentication failed with the search provider
    #[error("Authentication failed with search provider")]
    AuthenticationFailed,

    /// The search endpoint was not found
    #[error("Search endpoint not found")]
    NotFound,

    /// The response body could not be decoded
    #[error("Data format error: {0}")]
    DataFormat(String),
}
