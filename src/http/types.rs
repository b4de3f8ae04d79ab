//! Device API request/response schemas.
//!
//! Each response type is the exact contract of one endpoint: unknown fields
//! are ignored and missing required fields fail validation.

use serde::{Serialize, Deserialize};
use crate::types::Flag;

/// Login credentials, always sent as a JSON body.
#[derive(Serialize)]
pub(crate) struct HttpLoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str
}

/// Response data from `POST /login`.
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct HttpLoginResponse {
    /// The user the token was issued to.
    pub username: String,

    /// Bearer token for authenticated requests.
    pub token: String,

    /// Token lifetime in seconds from issue.
    pub expires: u64
}

// Hide token value in Debug output
impl std::fmt::Debug for HttpLoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpLoginResponse")
            .field("username", &self.username)
            .field("token", &"[REDACTED]")
            .field("expires", &self.expires)
            .finish()
    }
}

/// Response data from `POST /logout`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpLogoutResponse {
    /// Human readable result message.
    pub response: String
}

/// Response data from `GET /session/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpSessionStatusResponse {
    /// Whether the session behind the current token is active.
    pub active: bool
}

/// Response data from `GET /unauthorized/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpUnauthorizedStatusResponse {
    /// Configured device name.
    pub device_name: String,

    /// Hardware model, eg: RUTX11.
    pub device_model: String,

    /// Device identifier.
    pub device_identifier: String,

    /// Version of the device API.
    pub api_version: String,

    /// Web UI language code.
    pub lang: String
}

/// Response data from `GET /gps/global`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpGpsGlobalResponse {
    /// GPS service enabled.
    pub enabled: Flag,

    /// Galileo constellation support.
    pub galileo_sup: Flag,

    /// GLONASS constellation support.
    pub glonass_sup: Flag,

    /// BeiDou constellation support.
    pub beidou_sup: Flag,

    /// Data Power Optimisation enabled, only reported by devices supporting it.
    pub dpo_enabled: Option<Flag>,

    /// Receiver mode.
    pub mode: Option<Flag>,

    /// Position update interval.
    pub interval: Option<String>,

    /// Fix timeout.
    pub timeout: Option<String>
}

/// Response data from `GET /gps/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpGpsStatusResponse {
    /// Whether the receiver supports Data Power Optimisation.
    pub dpo_support: bool,

    /// GPS service uptime in seconds.
    pub uptime: i64
}

/// Response data from `GET /gps/position/status`.
/// The device reports every value as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpGpsPositionResponse {
    /// Horizontal accuracy.
    pub accuracy: String,

    /// Fix status code.
    pub fix_status: String,

    /// Altitude in meters.
    pub altitude: String,

    /// Ground speed in km/h.
    pub speed: String,

    /// Local timestamp of the fix.
    pub timestamp: String,

    /// Number of satellites used.
    pub satellites: String,

    /// Longitude in decimal degrees.
    pub longitude: String,

    /// Latitude in decimal degrees.
    pub latitude: String,

    /// Course over ground in degrees.
    pub angle: String,

    /// UTC timestamp of the fix.
    pub utc_timestamp: String
}

/// A single stored SMS message, as listed by `GET /messages/status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpMessage {
    /// Message text.
    pub message: String,

    /// Sender phone number.
    pub sender: String,

    /// Message index on the modem.
    pub id: String,

    /// Modem the message was received on, eg: 1-1.
    pub modem_id: String,

    /// Read status, eg: read or unread.
    pub status: String,

    /// Receive date as formatted by the device.
    pub date: String
}

/// The outgoing SMS message to be sent to a target number.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct HttpOutgoingMessage {
    /// The target phone number, in international format.
    pub number: String,

    /// The full message text.
    pub message: String,

    /// Modem to send from, eg: 1-1. The device picks its primary modem when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modem: Option<String>
}
impl HttpOutgoingMessage {

    /// Create a new outgoing message sent from the primary modem.
    pub fn new(number: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            message: message.into(),
            modem: None
        }
    }

    /// Send from a specific modem.
    pub fn with_modem(mut self, modem: impl Into<String>) -> Self {
        self.modem = Some(modem.into());
        self
    }
}

/// Action requests wrap their payload in a `data` object.
#[derive(Serialize)]
pub(crate) struct HttpActionRequest<'a, T> {
    pub data: &'a T
}

/// Response data from `POST /messages/actions/send`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpSendMessageResponse {
    /// Number of SMS parts used to deliver the message.
    pub sms_used: u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiResponse;
    use serde_json::json;

    #[test]
    fn gps_global_with_optional_fields_missing() {
        let body = json!({
            "success": true,
            "data": {
                "enabled": "1",
                "galileo_sup": "0",
                "glonass_sup": "1",
                "beidou_sup": "0",
                "unknown_field": "ignored"
            }
        });

        let response: ApiResponse<HttpGpsGlobalResponse> = serde_json::from_value(body).unwrap();
        let data = response.into_data().unwrap();
        assert_eq!(data.enabled, Flag::On);
        assert_eq!(data.galileo_sup, Flag::Off);
        assert_eq!(data.dpo_enabled, None);
        assert_eq!(data.mode, None);
        assert_eq!(data.interval, None);
    }

    #[test]
    fn gps_global_rejects_invalid_flag() {
        let body = json!({
            "success": true,
            "data": {
                "enabled": "2",
                "galileo_sup": "0",
                "glonass_sup": "0",
                "beidou_sup": "0"
            }
        });

        assert!(serde_json::from_value::<ApiResponse<HttpGpsGlobalResponse>>(body).is_err());
    }

    #[test]
    fn gps_global_rejects_native_booleans() {
        let body = json!({
            "success": true,
            "data": {
                "enabled": true,
                "galileo_sup": "0",
                "glonass_sup": "0",
                "beidou_sup": "0"
            }
        });

        assert!(serde_json::from_value::<ApiResponse<HttpGpsGlobalResponse>>(body).is_err());
    }

    #[test]
    fn missing_required_field_fails() {
        let body = json!({"success": true, "data": {"dpo_support": true}});
        assert!(serde_json::from_value::<ApiResponse<HttpGpsStatusResponse>>(body).is_err());
    }

    #[test]
    fn gps_position_requires_string_values() {
        let mut data = json!({
            "accuracy": "0.5",
            "fix_status": "1",
            "altitude": "120.3",
            "speed": "0",
            "timestamp": "1700000000",
            "satellites": "9",
            "longitude": "25.279652",
            "latitude": "54.687157",
            "angle": "0",
            "utc_timestamp": "1700000000"
        });
        let response: ApiResponse<HttpGpsPositionResponse> =
            serde_json::from_value(json!({"success": true, "data": data.clone()})).unwrap();
        assert_eq!(response.into_data().unwrap().satellites, "9");

        data["satellites"] = json!(9);
        assert!(
            serde_json::from_value::<ApiResponse<HttpGpsPositionResponse>>(
                json!({"success": true, "data": data})
            )
            .is_err()
        );
    }

    #[test]
    fn send_request_wraps_payload_in_data() {
        let message = HttpOutgoingMessage::new("+37060000000", "hello");
        let body = serde_json::to_value(HttpActionRequest { data: &message }).unwrap();
        assert_eq!(body, json!({"data": {"number": "+37060000000", "message": "hello"}}));

        let message = message.with_modem("1-1");
        let body = serde_json::to_value(HttpActionRequest { data: &message }).unwrap();
        assert_eq!(body["data"]["modem"], "1-1");
    }

    #[test]
    fn login_response_debug_hides_token() {
        let response = HttpLoginResponse {
            username: "admin".to_string(),
            token: "secret-token".to_string(),
            expires: 299
        };
        assert!(!format!("{response:?}").contains("secret-token"));
    }
}
