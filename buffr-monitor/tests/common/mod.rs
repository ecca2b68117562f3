//! Shared fixtures for monitor tests.

#![allow(dead_code)]

use buffr_monitor::{MonitorConfig, RequestObservation};
use chrono::{Duration, Utc};

/// A successful GET observation recorded now.
pub fn get_ok(url: &str) -> RequestObservation {
    RequestObservation::new("GET", url, "10.0.0.1")
        .with_status(200)
        .with_duration_ms(50)
}

/// A GET observation with the given status, recorded now.
pub fn with_status(url: &str, status: u16) -> RequestObservation {
    RequestObservation::new("GET", url, "10.0.0.1")
        .with_status(status)
        .with_duration_ms(50)
}

/// A GET observation with the given status, recorded `mins` minutes ago.
pub fn minutes_ago(url: &str, status: u16, mins: i64) -> RequestObservation {
    with_status(url, status).with_timestamp(Utc::now() - Duration::minutes(mins))
}

/// The default config with a small capacity, for eviction tests.
pub fn capped(capacity: usize) -> MonitorConfig {
    MonitorConfig {
        capacity,
        ..MonitorConfig::default()
    }
}
