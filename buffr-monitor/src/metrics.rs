//! Aggregate metrics derived from the observation window.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregates over a trailing window of observations.
///
/// Serialized to JSON as-is for dashboard consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Number of observations in the window.
    pub total_requests: usize,
    /// Mean handling time over observations that carry a duration, in
    /// milliseconds. Zero when none do.
    pub avg_duration_ms: f64,
    /// Fraction of observations in the window with status >= 400.
    pub error_rate: f64,
    /// Most frequently hit endpoints, descending by count; ties keep
    /// first-seen order.
    pub top_endpoints: Vec<EndpointStat>,
    /// Status code histogram over the window.
    pub status_codes: BTreeMap<u16, usize>,
    /// Request/error counts per clock hour for the trailing 24 hours,
    /// oldest hour first. Always 24 entries, empty hours included.
    pub hourly: Vec<HourlyBucket>,
}

/// Hit count for one `(method, path)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointStat {
    /// HTTP method.
    pub method: String,
    /// URL path with query string stripped.
    pub path: String,
    /// Observations in the window that hit this endpoint.
    pub count: usize,
}

/// Request/error counts for one clock hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Start of the hour, UTC.
    pub hour_start: DateTime<Utc>,
    /// Observations in this hour.
    pub requests: usize,
    /// Observations with status >= 400 in this hour.
    pub errors: usize,
}
