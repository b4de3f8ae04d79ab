//! GPS endpoints.

use crate::http::HttpClient;
use crate::http::error::HttpResult;
use crate::http::types::{HttpGpsGlobalResponse, HttpGpsPositionResponse, HttpGpsStatusResponse};
use crate::types::ApiResponse;

/// `/gps` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GpsEndpoint<'a> {
    http: &'a HttpClient,
}
impl<'a> GpsEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `/gps/position` endpoints.
    pub fn position(&self) -> GpsPositionEndpoint<'a> {
        GpsPositionEndpoint { http: self.http }
    }

    /// Fetch the global GPS configuration.
    pub async fn global(&self) -> HttpResult<ApiResponse<HttpGpsGlobalResponse>> {
        self.http.get("/gps/global", true).await
    }

    /// Fetch the GPS service status.
    pub async fn status(&self) -> HttpResult<ApiResponse<HttpGpsStatusResponse>> {
        self.http.get("/gps/status", true).await
    }
}

/// `/gps/position` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct GpsPositionEndpoint<'a> {
    http: &'a HttpClient,
}
impl GpsPositionEndpoint<'_> {
    /// Fetch the current position fix.
    pub async fn status(&self) -> HttpResult<ApiResponse<HttpGpsPositionResponse>> {
        self.http.get("/gps/position/status", true).await
    }
}
