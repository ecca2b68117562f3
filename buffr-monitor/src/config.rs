//! Monitor configuration.
//!
//! Every threshold the monitor applies is tunable here. The defaults are
//! the values the platform runs in production; hosts that need different
//! behavior construct the monitor with their own config.

use serde::{Deserialize, Serialize};

/// Tunable thresholds for a [`RequestMonitor`](crate::RequestMonitor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Maximum number of retained observations. Once the log grows past
    /// this, the oldest entries are evicted first.
    pub capacity: usize,
    /// Duration above which a recorded request is logged as slow, in
    /// milliseconds.
    pub slow_request_ms: u64,
    /// Duration above which a request fires a health warning signal, in
    /// milliseconds.
    pub very_slow_request_ms: u64,
    /// Age threshold applied by
    /// [`cleanup_expired`](crate::RequestMonitor::cleanup_expired), in days.
    pub max_age_days: i64,
    /// How many `(method, path)` pairs `metrics` reports.
    pub top_endpoints: usize,
    /// URL substrings that mark an authentication endpoint.
    pub auth_path_markers: Vec<String>,
    /// 5xx rate over the trailing hour above which health is at least
    /// warning even with no other signal.
    pub elevated_error_rate: f64,
    /// 5xx rate over the trailing hour that fires a warning signal.
    pub warning_error_rate: f64,
    /// 5xx rate over the trailing hour that forces critical.
    pub critical_error_rate: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            capacity: 10_000,
            slow_request_ms: 5_000,
            very_slow_request_ms: 10_000,
            max_age_days: 7,
            top_endpoints: 10,
            auth_path_markers: vec!["/auth".to_string(), "/login".to_string()],
            elevated_error_rate: 0.05,
            warning_error_rate: 0.10,
            critical_error_rate: 0.20,
        }
    }
}
