//! Device connection configuration.

use std::time::Duration;
use crate::error::{ClientError, ClientResult};

/// Environment variable holding the device host.
pub const ENV_HOST: &str = "TELTONIKA_HOST";

/// Environment variable holding the API username.
pub const ENV_USERNAME: &str = "TELTONIKA_USERNAME";

/// Environment variable holding the API password.
pub const ENV_PASSWORD: &str = "TELTONIKA_PASSWORD";

/// Complete client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    /// Device hostname or IP address. eg: 192.168.1.1
    pub host: String,

    /// API username, sent in the login request body.
    pub username: String,

    /// API password, sent in the login request body.
    pub password: String,

    /// Device API port.
    pub port: u16,

    /// Use https rather than http.
    pub use_tls: bool,

    /// Verify the device TLS certificate. Devices ship with a self-signed
    /// certificate, so this is off unless explicitly enabled.
    pub verify_tls: bool,

    /// Timeout for establishing the TCP/TLS connection.
    pub connect_timeout: Duration,

    /// Timeout for a complete request/response round-trip.
    pub timeout: Duration,
}
impl ClientConfig {
    /// Create a new configuration with default port (443), TLS enabled,
    /// and certificate verification disabled.
    ///
    /// # Example
    /// ```
    /// use ponika::config::ClientConfig;
    ///
    /// let config = ClientConfig::new("192.168.1.1", "admin", "password");
    /// assert_eq!(config.base_url(), "https://192.168.1.1:443/api");
    /// ```
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            port: 443,
            use_tls: true,
            verify_tls: false,
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read host and credentials from `TELTONIKA_HOST`, `TELTONIKA_USERNAME`
    /// and `TELTONIKA_PASSWORD`. All other values use their defaults.
    pub fn from_env() -> ClientResult<Self> {
        let read = |name: &'static str| {
            std::env::var(name)
                .ok()
                .filter(|value| !value.is_empty())
                .ok_or(ClientError::MissingConfiguration(name))
        };

        Ok(Self::new(read(ENV_HOST)?, read(ENV_USERNAME)?, read(ENV_PASSWORD)?))
    }

    /// Set the device API port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enable or disable https.
    pub fn with_tls(mut self, use_tls: bool) -> Self {
        self.use_tls = use_tls;
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The API base URL all endpoint paths are appended to.
    pub fn base_url(&self) -> String {
        let scheme = if self.use_tls { "https" } else { "http" };
        format!("{scheme}://{}:{}/api", self.host, self.port)
    }

    /// Ensure all required values are present.
    pub(crate) fn validate(&self) -> ClientResult<()> {
        if self.host.is_empty() {
            return Err(ClientError::MissingConfiguration("host"));
        }
        if self.username.is_empty() {
            return Err(ClientError::MissingConfiguration("username"));
        }
        if self.password.is_empty() {
            return Err(ClientError::MissingConfiguration("password"));
        }
        Ok(())
    }
}

// Keep the password out of Debug output.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("port", &self.port)
            .field("use_tls", &self.use_tls)
            .field("verify_tls", &self.verify_tls)
            .field("connect_timeout", &self.connect_timeout)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_uses_https_on_443() {
        let config = ClientConfig::new("router.lan", "admin", "secret");
        assert_eq!(config.base_url(), "https://router.lan:443/api");
    }

    #[test]
    fn plain_http_on_custom_port() {
        let config = ClientConfig::new("router.lan", "admin", "secret")
            .with_tls(false)
            .with_port(8080);
        assert_eq!(config.base_url(), "http://router.lan:8080/api");
    }

    #[test]
    fn certificate_verification_is_off_by_default() {
        let config = ClientConfig::new("router.lan", "admin", "secret");
        assert!(!config.verify_tls);
        assert!(config.with_verify_tls(true).verify_tls);
    }

    #[test]
    fn missing_values_are_rejected() {
        let err = ClientConfig::new("", "admin", "secret").validate().unwrap_err();
        assert!(matches!(err, ClientError::MissingConfiguration("host")));

        let err = ClientConfig::new("router.lan", "admin", "").validate().unwrap_err();
        assert!(matches!(err, ClientError::MissingConfiguration("password")));

        assert!(ClientConfig::new("router.lan", "admin", "secret").validate().is_ok());
    }

    #[test]
    fn debug_output_hides_password() {
        let config = ClientConfig::new("router.lan", "admin", "hunter2");
        let output = format!("{config:?}");
        assert!(!output.contains("hunter2"));
        assert!(output.contains("[REDACTED]"));
    }
}
