use thiserror::Error;

/// Errors that can occur during fetch and search operations
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed API response for '{title}': {reason}")]
    MalformedResponse { title: String, reason: String },

    #[error("Invalid target word pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for search operations
pub type Result<T> = std::result::Result<T, SearchError>;
