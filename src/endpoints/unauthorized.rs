//! Endpoints that do not require a token.

use crate::http::HttpClient;
use crate::http::error::HttpResult;
use crate::http::types::HttpUnauthorizedStatusResponse;
use crate::types::ApiResponse;

/// `/unauthorized` endpoints, available without logging in.
#[derive(Debug, Clone, Copy)]
pub struct UnauthorizedEndpoint<'a> {
    http: &'a HttpClient,
}
impl<'a> UnauthorizedEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the device name, model and API version. This never triggers a login.
    pub async fn status(&self) -> HttpResult<ApiResponse<HttpUnauthorizedStatusResponse>> {
        self.http.get("/unauthorized/status", false).await
    }
}
