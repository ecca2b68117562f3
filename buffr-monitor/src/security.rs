//! Security-event heuristics over the observation window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity assigned to a security event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecuritySeverity {
    /// Credential or session problem.
    High,
    /// Client hitting rate limits.
    Medium,
    /// Suspicious but routine.
    Low,
}

/// The heuristic a security event matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventKind {
    /// Request rejected with 401.
    UnauthorizedAccess,
    /// Request rejected with 429.
    RateLimitExceeded,
    /// POST to an authentication endpoint rejected with 400.
    FailedAuthAttempt,
}

impl SecurityEventKind {
    /// Severity assigned to this kind of event.
    #[must_use]
    pub const fn severity(&self) -> SecuritySeverity {
        match self {
            Self::UnauthorizedAccess => SecuritySeverity::High,
            Self::RateLimitExceeded => SecuritySeverity::Medium,
            Self::FailedAuthAttempt => SecuritySeverity::Low,
        }
    }
}

/// One observation that matched a security heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// Which heuristic matched.
    pub kind: SecurityEventKind,
    /// Severity for the matched kind.
    pub severity: SecuritySeverity,
    /// HTTP method of the offending request.
    pub method: String,
    /// URL path with query string stripped.
    pub path: String,
    /// Client IP address.
    pub client_ip: String,
    /// Authenticated user, if any.
    pub user_id: Option<String>,
    /// Response status code.
    pub status: u16,
    /// When the request was observed.
    pub timestamp: DateTime<Utc>,
}
