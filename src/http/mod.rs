//! Device API HTTP transport.
//! This can be used to interface with the HTTP API standalone if required.

use std::time::Instant;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::error::{HttpError, HttpResult};
use crate::http::token::{Token, TokenCache};
use crate::http::types::{HttpLoginRequest, HttpLoginResponse, HttpLogoutResponse};
use crate::types::ApiResponse;

pub mod error;
pub mod token;
pub mod types;

/// HTTP methods used by the device API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Parameters are sent as a query string.
    Get,

    /// Parameters are sent as a JSON body.
    Post,
}
impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Verify the status code is below 400, then parse the body as an envelope.
/// Error bodies are kept as text and never parsed.
async fn read_http_response<T>(response: reqwest::Response) -> HttpResult<ApiResponse<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error!".to_string());

        return Err(HttpError::Status {
            status: status.as_u16(),
            message: error_text,
        });
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(HttpError::Validation)
}

/// Create a reqwest client builder with timeouts and TLS behaviour applied.
fn client_builder(config: &ClientConfig) -> ClientResult<reqwest::ClientBuilder> {
    let builder = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout);

    if !config.use_tls {
        return Ok(builder);
    }

    #[cfg(not(any(feature = "tls-rustls", feature = "tls-native")))]
    {
        let _ = builder; // Suppress unused variable warning
        Err(crate::error::ClientError::InvalidConfiguration(
            "TLS enabled but no TLS features enabled. Enable either 'tls-rustls' or 'tls-native' feature".to_string()
        ))
    }

    #[cfg(any(feature = "tls-rustls", feature = "tls-native"))]
    {
        let mut builder = builder;

        // Configure TLS backend
        #[cfg(feature = "tls-rustls")]
        {
            builder = builder.use_rustls_tls();
        }

        #[cfg(feature = "tls-native")]
        {
            builder = builder.use_native_tls();
        }

        if !config.verify_tls {
            log::warn!(
                "TLS certificate verification is disabled for {}, the device certificate will not be checked",
                config.host
            );
            builder = builder.danger_accept_invalid_certs(true);
        }
        Ok(builder)
    }
}

/// Device API HTTP interface client.
/// Owns the connection pool, the login credentials and the token cache.
pub struct HttpClient {
    base_url: String,
    username: String,
    password: String,
    client: reqwest::Client,
    token: TokenCache,
}
impl HttpClient {
    /// Create a new HTTP client for the configured device.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        // Fail early on hosts that cannot form a valid URL.
        let base_url = config.base_url();
        reqwest::Url::parse(&base_url).map_err(HttpError::from)?;

        let client = client_builder(config)?
            .build()
            .map_err(HttpError::from)?;

        Ok(Self {
            base_url,
            username: config.username.clone(),
            password: config.password.clone(),
            client,
            token: TokenCache::new(),
        })
    }

    /// The API base URL, eg: https://192.168.1.1:443/api
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Log in with the given credentials and return the raw response.
    /// This does not touch the token cache.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> HttpResult<ApiResponse<HttpLoginResponse>> {
        log::info!("Logging in with username: {username}");
        let body = HttpLoginRequest { username, password };

        self.send(Method::Post, "/login", Some(&body), None).await
    }

    /// Log out the current token, then drop it from the cache so the next
    /// authenticated request logs in again.
    pub async fn logout(&self) -> HttpResult<ApiResponse<HttpLogoutResponse>> {
        log::info!("Logging out");
        let result = self.post("/logout", None::<&()>, true).await;

        self.token.clear().await;
        result
    }

    /// Get a valid bearer token, logging in if none is cached or the cached
    /// one has expired. Returns `None` when login fails.
    pub async fn get_token(&self) -> Option<String> {
        self.bearer_token().await.ok()
    }

    /// Whether a non-expired token is currently cached.
    pub async fn has_valid_token(&self) -> bool {
        self.token.is_valid().await
    }

    /// Send a GET request without parameters.
    pub async fn get<T>(&self, path: &str, auth_required: bool) -> HttpResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
    {
        self.request(Method::Get, path, None::<&()>, auth_required).await
    }

    /// Send a POST request with an optional JSON body.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        auth_required: bool,
    ) -> HttpResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::Post, path, body, auth_required).await
    }

    /// Send a request to `path` and parse the response envelope into `T`.
    /// Parameters become a query string for GET and a JSON body for POST.
    /// When `auth_required` is set the request is only sent with a bearer
    /// token, never unauthenticated.
    pub async fn request<T, P>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
        auth_required: bool,
    ) -> HttpResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let token = if auth_required {
            Some(self.bearer_token().await?)
        } else {
            None
        };

        self.send(method, path, params, token.as_deref()).await
    }

    /// Get the cached token or refresh it through a login with the stored credentials.
    async fn bearer_token(&self) -> HttpResult<String> {
        self.token
            .get_or_refresh(move || async move {
                let issued_at = Instant::now();
                let response = self
                    .login(&self.username, &self.password)
                    .await
                    .map_err(|e| {
                        log::warn!("Login request failed: {e}");
                        HttpError::AuthenticationFailure {
                            reason: e.to_string(),
                            source: Some(Box::new(e)),
                        }
                    })?;

                let Some(data) = response.into_data() else {
                    log::warn!("Login was rejected by the device");
                    return Err(HttpError::authentication(
                        "login response was unsuccessful or empty",
                    ));
                };

                Ok(Token::new(data.token, data.expires, issued_at))
            })
            .await
    }

    /// Build and send a single request with an optional bearer token.
    async fn send<T, P>(
        &self,
        method: Method,
        path: &str,
        params: Option<&P>,
        token: Option<&str>,
    ) -> HttpResult<ApiResponse<T>>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        log::info!("Making {method} request to: {path}");

        let url = reqwest::Url::parse(&format!("{}{path}", self.base_url))?;
        let mut builder = match method {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };

        if let Some(params) = params {
            builder = match method {
                Method::Get => builder.query(params),
                Method::Post => builder.json(params),
            };
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        read_http_response(response).await
    }
}

// Keep the password out of Debug output.
impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("token", &self.token)
            .finish_non_exhaustive()
    }
}
