//! HTTP transport errors.

use thiserror::Error;

/// Errors raised while talking to the device API.
#[derive(Error, Debug)]
pub enum HttpError {
    /// Network request failed before a response was received.
    #[error("Network request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The endpoint path could not be joined onto the base URL.
    #[error("Invalid URL: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// The device answered with a status of 400 or above. The body is
    /// kept for diagnostics only and never parsed as an envelope.
    #[error("HTTP {status}: {message}")]
    Status {
        /// Response status code.
        status: u16,

        /// Response body text.
        message: String,
    },

    /// The response body does not match the expected envelope/schema.
    #[error("Response validation failed: {0}")]
    Validation(#[from] serde_json::Error),

    /// No bearer token could be obtained for an authenticated request.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailure {
        /// Why no token could be obtained.
        reason: String,

        /// The login error, when the login request itself failed.
        #[source]
        source: Option<Box<HttpError>>,
    },
}
impl HttpError {
    /// An authentication failure without an underlying request error,
    /// eg: the device answered the login with `success=false`.
    pub fn authentication(reason: impl Into<String>) -> Self {
        HttpError::AuthenticationFailure {
            reason: reason.into(),
            source: None,
        }
    }

    /// The HTTP status code, if this is a status error. For authentication
    /// failures this is the status of the failed login request.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            HttpError::RequestError(e) => e.status().map(|s| s.as_u16()),
            HttpError::AuthenticationFailure { source: Some(e), .. } => e.status(),
            _ => None,
        }
    }
}

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn authentication_failure_keeps_login_status() {
        let login = HttpError::Status {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        let err = HttpError::AuthenticationFailure {
            reason: login.to_string(),
            source: Some(Box::new(login)),
        };

        assert_eq!(err.status(), Some(401));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "Authentication failed: HTTP 401: Unauthorized");
    }

    #[test]
    fn rejected_login_has_no_status() {
        let err = HttpError::authentication("rejected");
        assert_eq!(err.status(), None);
        assert!(err.source().is_none());
    }
}
