//! Session endpoints.

use crate::http::HttpClient;
use crate::http::error::HttpResult;
use crate::http::types::HttpSessionStatusResponse;
use crate::types::ApiResponse;

/// `/session` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SessionEndpoint<'a> {
    http: &'a HttpClient,
}
impl<'a> SessionEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch whether the current session is active.
    pub async fn status(&self) -> HttpResult<ApiResponse<HttpSessionStatusResponse>> {
        self.http.get("/session/status", true).await
    }
}
