//! SMS message endpoints.

use crate::http::HttpClient;
use crate::http::error::HttpResult;
use crate::http::types::{
    HttpActionRequest, HttpMessage, HttpOutgoingMessage, HttpSendMessageResponse,
};
use crate::types::ApiResponse;

/// Mask all but the last three characters of a phone number for logging.
fn masked_number(number: &str) -> String {
    let visible = number.chars().count().saturating_sub(3);
    number
        .chars()
        .enumerate()
        .map(|(i, c)| if i < visible { '*' } else { c })
        .collect()
}

/// `/messages` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct MessagesEndpoint<'a> {
    http: &'a HttpClient,
}
impl<'a> MessagesEndpoint<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List the SMS messages stored on all modems.
    pub async fn status(&self) -> HttpResult<ApiResponse<Vec<HttpMessage>>> {
        self.http.get("/messages/status", true).await
    }

    /// Send an SMS message to a target number.
    pub async fn send(
        &self,
        message: &HttpOutgoingMessage,
    ) -> HttpResult<ApiResponse<HttpSendMessageResponse>> {
        log::debug!("Sending SMS message to {}", masked_number(&message.number));
        let body = HttpActionRequest { data: message };

        self.http.post("/messages/actions/send", Some(&body), true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_number_hides_all_but_last_digits() {
        assert_eq!(masked_number("+37060012345"), "*********345");
        assert_eq!(masked_number("12"), "12");
        assert_eq!(masked_number(""), "");
    }
}
