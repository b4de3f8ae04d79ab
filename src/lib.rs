//! Rust client library for the Teltonika RutOS device API.
//!
//! The [`Client`] logs in with the configured credentials on the first
//! authenticated request, caches the bearer token until it expires, and
//! exposes the API through typed endpoint groups.
//!
//! ```no_run
//! use ponika::Client;
//! use ponika::config::ClientConfig;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientConfig::new("192.168.1.1", "admin", "password"))?;
//!
//! let position = client.gps().position().status().await?;
//! if let Some(fix) = position.into_data() {
//!     println!("{}, {}", fix.latitude, fix.longitude);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod types;

use std::sync::Arc;
use crate::config::ClientConfig;
use crate::endpoints::{GpsEndpoint, MessagesEndpoint, SessionEndpoint, UnauthorizedEndpoint};
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::http::error::HttpResult;
use crate::http::types::{HttpLoginResponse, HttpLogoutResponse};
use crate::types::ApiResponse;

pub use crate::error::ClientError;
pub use crate::http::error::HttpError;

/// Device API client.
#[derive(Debug, Clone)]
pub struct Client {
    http: Arc<HttpClient>,
}
impl Client {
    /// Create a new client. Fails when the host or credentials are missing,
    /// or when TLS is requested without a TLS feature enabled.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            http: Arc::new(HttpClient::new(&config)?),
        })
    }

    /// Create a client from `TELTONIKA_HOST`, `TELTONIKA_USERNAME` and `TELTONIKA_PASSWORD`.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Borrow the underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Get a shared handle to the underlying HTTP client.
    pub fn http_arc(&self) -> Arc<HttpClient> {
        Arc::clone(&self.http)
    }

    /// The API base URL, eg: https://192.168.1.1:443/api
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Log in with explicit credentials and return the raw response.
    /// The cached token is managed separately through [`Client::get_token`].
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> HttpResult<ApiResponse<HttpLoginResponse>> {
        self.http.login(username, password).await
    }

    /// Log out and drop the cached token.
    pub async fn logout(&self) -> HttpResult<ApiResponse<HttpLogoutResponse>> {
        self.http.logout().await
    }

    /// Get a valid bearer token, logging in when none is cached or it has
    /// expired. Returns `None` when the login fails.
    pub async fn get_token(&self) -> Option<String> {
        self.http.get_token().await
    }

    /// Endpoints available without a token.
    pub fn unauthorized(&self) -> UnauthorizedEndpoint<'_> {
        UnauthorizedEndpoint::new(&self.http)
    }

    /// Session endpoints.
    pub fn session(&self) -> SessionEndpoint<'_> {
        SessionEndpoint::new(&self.http)
    }

    /// GPS endpoints.
    pub fn gps(&self) -> GpsEndpoint<'_> {
        GpsEndpoint::new(&self.http)
    }

    /// SMS message endpoints.
    pub fn messages(&self) -> MessagesEndpoint<'_> {
        MessagesEndpoint::new(&self.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_fail_construction() {
        let err = Client::new(ClientConfig::new("router.lan", "", "secret")).unwrap_err();
        assert!(matches!(err, ClientError::MissingConfiguration("username")));
    }

    #[test]
    fn client_exposes_base_url() {
        let client = Client::new(
            ClientConfig::new("10.0.0.1", "admin", "secret")
                .with_tls(false)
                .with_port(8080),
        )
        .unwrap();
        assert_eq!(client.base_url(), "http://10.0.0.1:8080/api");
    }
}
