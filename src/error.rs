//! Client-level errors.

/// Client-level errors.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP client error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] crate::http::error::HttpError),

    /// A required configuration value (host or credentials) is missing
    #[error("Missing configuration value: {0}")]
    MissingConfiguration(&'static str),

    /// The configuration cannot be honoured with the enabled crate features
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
