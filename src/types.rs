//! Types shared by every endpoint.

use serde::{Serialize, Deserialize};

/// The `{success, data}` envelope wrapping every API response.
/// `data` is absent when the device reports a failure or has nothing to return.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {

    /// Whether the device accepted the request.
    pub success: bool,

    /// The endpoint specific payload.
    pub data: Option<T>
}
impl<T> ApiResponse<T> {

    /// Return the payload only when the device reported success.
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }
}

/// A boolean transmitted as the literal string `"0"` or `"1"`.
/// Any other value is rejected when parsing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {

    /// Transmitted as `"0"`.
    #[serde(rename = "0")]
    Off,

    /// Transmitted as `"1"`.
    #[serde(rename = "1")]
    On
}
impl Flag {

    /// Returns true for `"1"`.
    pub fn is_on(self) -> bool {
        matches!(self, Flag::On)
    }
}
impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag.is_on()
    }
}
impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value { Flag::On } else { Flag::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_only_literal_strings() {
        assert_eq!(serde_json::from_str::<Flag>(r#""1""#).unwrap(), Flag::On);
        assert_eq!(serde_json::from_str::<Flag>(r#""0""#).unwrap(), Flag::Off);
        assert!(serde_json::from_str::<Flag>(r#""2""#).is_err());
        assert!(serde_json::from_str::<Flag>("true").is_err());
        assert!(serde_json::from_str::<Flag>("1").is_err());
    }

    #[test]
    fn flag_serializes_as_string() {
        assert_eq!(serde_json::to_string(&Flag::On).unwrap(), r#""1""#);
        assert!(bool::from(Flag::On));
        assert_eq!(Flag::from(false), Flag::Off);
    }

    #[test]
    fn envelope_without_data_field() {
        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());

        let response: ApiResponse<String> =
            serde_json::from_str(r#"{"success": false, "data": null}"#).unwrap();
        assert!(response.into_data().is_none());
    }

    #[test]
    fn envelope_requires_success_flag() {
        assert!(serde_json::from_str::<ApiResponse<String>>(r#"{"data": "x"}"#).is_err());
    }

    #[test]
    fn failed_envelope_hides_data() {
        let response = ApiResponse { success: false, data: Some(1) };
        assert_eq!(response.into_data(), None);
    }

    #[test]
    fn envelope_holds_list_payloads() {
        let response: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2, 3]}"#).unwrap();
        assert_eq!(response.into_data(), Some(vec![1, 2, 3]));
    }
}
