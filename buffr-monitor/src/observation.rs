//! Request/response observations consumed by the monitor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable HTTP request/response observation.
///
/// Pushed by the host's middleware layer after a request completes. Fields
/// the middleware could not determine stay `None`; the monitor tolerates
/// partial observations and excludes them from statistics that need the
/// missing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestObservation {
    /// HTTP method, as received.
    pub method: String,
    /// Request URL, possibly with query string.
    pub url: String,
    /// Client IP address.
    pub client_ip: String,
    /// Authenticated user, if any.
    #[serde(default)]
    pub user_id: Option<String>,
    /// When the request was observed.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock handling time in milliseconds.
    #[serde(default)]
    pub duration_ms: Option<u64>,
    /// Response status code, if a response was produced.
    #[serde(default)]
    pub status: Option<u16>,
    /// Error string for requests that failed outside HTTP semantics.
    #[serde(default)]
    pub error: Option<String>,
    /// Request body size in bytes.
    #[serde(default)]
    pub request_bytes: Option<u64>,
    /// Response body size in bytes.
    #[serde(default)]
    pub response_bytes: Option<u64>,
}

impl RequestObservation {
    /// Creates an observation stamped with the current time.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        url: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            client_ip: client_ip.into(),
            user_id: None,
            timestamp: Utc::now(),
            duration_ms: None,
            status: None,
            error: None,
            request_bytes: None,
            response_bytes: None,
        }
    }

    /// Sets the authenticated user.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Sets the response status code.
    #[must_use]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the handling duration in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Sets the error string.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Sets the request and response body sizes.
    #[must_use]
    pub fn with_sizes(mut self, request_bytes: u64, response_bytes: u64) -> Self {
        self.request_bytes = Some(request_bytes);
        self.response_bytes = Some(response_bytes);
        self
    }

    /// Overrides the observation timestamp.
    ///
    /// The middleware's clock is authoritative; this also lets tests place
    /// observations precisely in time.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the URL with query string and fragment stripped.
    #[must_use]
    pub fn path(&self) -> &str {
        let end = self.url.find(['?', '#']).unwrap_or(self.url.len());
        &self.url[..end]
    }
}
