//! Bearer token cache.

use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use crate::http::error::HttpResult;

/// Upper bound on a server reported token lifetime, so the expiry instant
/// always stays representable.
const MAX_LIFETIME_SECS: u64 = u32::MAX as u64;

/// A bearer token and the instant it stops being valid.
#[derive(Clone)]
pub struct Token {
    value: String,
    expires_at: Instant,
}
impl Token {
    /// Create a token that expires `expires_in` seconds after `issued_at`.
    pub fn new(value: impl Into<String>, expires_in: u64, issued_at: Instant) -> Self {
        let lifetime = if expires_in > MAX_LIFETIME_SECS {
            log::warn!("Token lifetime of {expires_in}s is out of range, capping at {MAX_LIFETIME_SECS}s");
            MAX_LIFETIME_SECS
        } else {
            expires_in
        };
        let expires_at = issued_at
            .checked_add(Duration::from_secs(lifetime))
            .unwrap_or(issued_at);

        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// The raw token value, for use in the authorization header only.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The instant this token expires.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// True while `now` is strictly before the expiry instant.
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

// Hide token value in Debug output
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Holds at most one token. The slot stays locked while a refresh is in
/// flight, so concurrent callers holding a stale token wait for the single
/// login instead of starting their own.
#[derive(Debug, Default)]
pub struct TokenCache {
    slot: Mutex<Option<Token>>,
}
impl TokenCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached token value if still valid, otherwise run `refresh`
    /// and store its result. A failed refresh leaves the cache empty.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> HttpResult<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = HttpResult<Token>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(token) = slot.as_ref()
            && token.is_valid_at(Instant::now())
        {
            log::debug!("Using cached token");
            return Ok(token.value.clone());
        }

        *slot = None;
        let token = refresh().await?;
        log::debug!("Stored refreshed token");

        let value = token.value.clone();
        *slot = Some(token);
        Ok(value)
    }

    /// Drop the cached token, forcing the next lookup to log in again.
    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }

    /// Whether a token is cached and not yet expired.
    pub async fn is_valid(&self) -> bool {
        self.slot
            .lock()
            .await
            .as_ref()
            .is_some_and(|token| token.is_valid_at(Instant::now()))
    }
}
