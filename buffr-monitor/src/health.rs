//! Health classification over the trailing hour of traffic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-valued classification of recent system behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Traffic looks normal.
    Healthy,
    /// At least one warning signal fired, or the 5xx rate is elevated.
    Warning,
    /// The 5xx rate is past the critical threshold, or signals piled up.
    Critical,
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Result of a health check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall classification.
    pub status: HealthStatus,
    /// Human-readable description of each fired signal.
    pub issues: Vec<String>,
    /// 5xx rate over the trailing hour.
    pub error_rate: f64,
    /// When the check ran.
    pub checked_at: DateTime<Utc>,
}
