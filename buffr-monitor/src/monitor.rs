//! The bounded observation log and its derived queries.

use chrono::{DateTime, Duration, DurationRound, Utc};
use std::collections::{BTreeMap, HashMap, VecDeque};
use tracing::{error, warn};

use crate::config::MonitorConfig;
use crate::health::{HealthReport, HealthStatus};
use crate::metrics::{EndpointStat, HourlyBucket, RequestMetrics};
use crate::observation::RequestObservation;
use crate::security::{SecurityEvent, SecurityEventKind};

/// Maximum number of events one `security_events` call returns.
const SECURITY_EVENT_LIMIT: usize = 100;

/// Hours of history the hourly metrics series covers.
const HOURLY_SERIES_HOURS: i64 = 24;

/// An in-process, size-bounded log of request observations.
///
/// One instance per process, owned by the host and threaded explicitly to
/// call sites; there is no ambient global. Recording and eviction mutate
/// the log, every query is a read-only sweep over it, and nothing is
/// persisted. The log is per-process by design: horizontally scaled
/// deployments see per-instance metrics.
///
/// Hosts that share a monitor across threads wrap it in their own lock;
/// the crate imposes none.
#[derive(Debug)]
pub struct RequestMonitor {
    config: MonitorConfig,
    entries: VecDeque<RequestObservation>,
}

impl RequestMonitor {
    /// Creates a monitor with production defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::default())
    }

    /// Creates a monitor with the given thresholds.
    #[must_use]
    pub fn with_config(config: MonitorConfig) -> Self {
        Self {
            config,
            entries: VecDeque::new(),
        }
    }

    /// Appends an observation, evicting from the front once the log exceeds
    /// the configured capacity.
    ///
    /// Never fails: partial observations are accepted as-is and simply
    /// excluded from statistics that need the missing field. Server errors
    /// and slow responses are surfaced as `tracing` diagnostics at record
    /// time so they reach the host's log stream immediately.
    pub fn record(&mut self, observation: RequestObservation) {
        if let Some(status) = observation.status {
            if status >= 500 {
                error!(
                    method = %observation.method,
                    path = %observation.path(),
                    status,
                    "server error response"
                );
            }
        }
        if let Some(duration_ms) = observation.duration_ms {
            if duration_ms > self.config.slow_request_ms {
                warn!(
                    method = %observation.method,
                    path = %observation.path(),
                    duration_ms,
                    "slow response"
                );
            }
        }

        self.entries.push_back(observation);
        while self.entries.len() > self.config.capacity {
            self.entries.pop_front();
        }
    }

    /// Computes aggregates over the trailing `window_hours` hours.
    ///
    /// The hourly series always covers the trailing 24 clock hours
    /// regardless of `window_hours`.
    #[must_use]
    pub fn metrics(&self, window_hours: i64) -> RequestMetrics {
        let now = Utc::now();
        let cutoff = now - Duration::hours(window_hours);
        let windowed: Vec<&RequestObservation> = self
            .entries
            .iter()
            .filter(|o| o.timestamp > cutoff)
            .collect();

        let total_requests = windowed.len();

        let durations: Vec<u64> = windowed.iter().filter_map(|o| o.duration_ms).collect();
        let avg_duration_ms = if durations.is_empty() {
            0.0
        } else {
            durations.iter().sum::<u64>() as f64 / durations.len() as f64
        };

        let errors = windowed
            .iter()
            .filter(|o| o.status.is_some_and(|s| s >= 400))
            .count();
        let error_rate = if total_requests == 0 {
            0.0
        } else {
            errors as f64 / total_requests as f64
        };

        // Count (method, path) pairs, remembering first-seen order so the
        // stable sort below breaks count ties the way the entries arrived.
        let mut endpoint_order: Vec<(String, String)> = Vec::new();
        let mut endpoint_counts: HashMap<(String, String), usize> = HashMap::new();
        for obs in &windowed {
            let key = (obs.method.clone(), obs.path().to_string());
            if !endpoint_counts.contains_key(&key) {
                endpoint_order.push(key.clone());
            }
            *endpoint_counts.entry(key).or_insert(0) += 1;
        }
        let mut top_endpoints: Vec<EndpointStat> = endpoint_order
            .into_iter()
            .map(|key| {
                let count = endpoint_counts.remove(&key).unwrap_or(0);
                EndpointStat {
                    method: key.0,
                    path: key.1,
                    count,
                }
            })
            .collect();
        top_endpoints.sort_by(|a, b| b.count.cmp(&a.count));
        top_endpoints.truncate(self.config.top_endpoints);

        let mut status_codes: BTreeMap<u16, usize> = BTreeMap::new();
        for obs in &windowed {
            if let Some(status) = obs.status {
                *status_codes.entry(status).or_insert(0) += 1;
            }
        }

        RequestMetrics {
            total_requests,
            avg_duration_ms,
            error_rate,
            top_endpoints,
            status_codes,
            hourly: self.hourly_series(now),
        }
    }

    /// Classifies the trailing hour of traffic.
    ///
    /// Warning signals: no requests at all; 5xx rate above the warning
    /// threshold; any response slower than the very-slow threshold. The
    /// final status escalates to critical when more than two signals fired
    /// or the 5xx rate exceeds the critical threshold, and to warning when
    /// any signal fired or the rate exceeds the elevated threshold.
    #[must_use]
    pub fn health(&self) -> HealthReport {
        let now = Utc::now();
        let cutoff = now - Duration::hours(1);
        let recent: Vec<&RequestObservation> = self
            .entries
            .iter()
            .filter(|o| o.timestamp > cutoff)
            .collect();

        let mut issues = Vec::new();

        if recent.is_empty() {
            issues.push("no requests in the last hour".to_string());
        }

        let server_errors = recent
            .iter()
            .filter(|o| o.status.is_some_and(|s| s >= 500))
            .count();
        let error_rate = if recent.is_empty() {
            0.0
        } else {
            server_errors as f64 / recent.len() as f64
        };
        if error_rate > self.config.warning_error_rate {
            issues.push(format!(
                "elevated 5xx rate over the last hour: {:.1}%",
                error_rate * 100.0
            ));
        }

        let slow = recent
            .iter()
            .filter(|o| {
                o.duration_ms
                    .is_some_and(|d| d > self.config.very_slow_request_ms)
            })
            .count();
        if slow > 0 {
            issues.push(format!(
                "{slow} response(s) slower than {} ms",
                self.config.very_slow_request_ms
            ));
        }

        let status = if issues.len() > 2 || error_rate > self.config.critical_error_rate {
            HealthStatus::Critical
        } else if !issues.is_empty() || error_rate > self.config.elevated_error_rate {
            HealthStatus::Warning
        } else {
            HealthStatus::Healthy
        };

        HealthReport {
            status,
            issues,
            error_rate,
            checked_at: now,
        }
    }

    /// Scans the trailing `window_hours` hours for observations matching
    /// the security heuristics: 401 responses, 429 responses, and rejected
    /// POSTs to authentication endpoints. Returns the most recent 100,
    /// newest first.
    #[must_use]
    pub fn security_events(&self, window_hours: i64) -> Vec<SecurityEvent> {
        let cutoff = Utc::now() - Duration::hours(window_hours);
        self.entries
            .iter()
            .rev()
            .filter(|o| o.timestamp > cutoff)
            .filter_map(|o| self.classify_security(o))
            .take(SECURITY_EVENT_LIMIT)
            .collect()
    }

    /// Drops all entries older than `max_age_days`, returning how many were
    /// removed. Invoked by an external periodic timer; the monitor never
    /// schedules anything itself.
    pub fn cleanup(&mut self, max_age_days: i64) -> usize {
        let cutoff = Utc::now() - Duration::days(max_age_days);
        let before = self.entries.len();
        self.entries.retain(|o| o.timestamp > cutoff);
        before - self.entries.len()
    }

    /// [`cleanup`](Self::cleanup) with the configured default age.
    pub fn cleanup_expired(&mut self) -> usize {
        self.cleanup(self.config.max_age_days)
    }

    /// Number of retained observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards every retained observation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Request/error counts per clock hour for the trailing 24 hours,
    /// oldest hour first.
    fn hourly_series(&self, now: DateTime<Utc>) -> Vec<HourlyBucket> {
        let current_hour = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
        let oldest = current_hour - Duration::hours(HOURLY_SERIES_HOURS - 1);

        let mut buckets: Vec<HourlyBucket> = (0..HOURLY_SERIES_HOURS)
            .map(|offset| HourlyBucket {
                hour_start: oldest + Duration::hours(offset),
                requests: 0,
                errors: 0,
            })
            .collect();

        for obs in &self.entries {
            if obs.timestamp < oldest || obs.timestamp >= current_hour + Duration::hours(1) {
                continue;
            }
            let idx = (obs.timestamp - oldest).num_hours() as usize;
            if let Some(bucket) = buckets.get_mut(idx) {
                bucket.requests += 1;
                if obs.status.is_some_and(|s| s >= 400) {
                    bucket.errors += 1;
                }
            }
        }

        buckets
    }

    /// Matches one observation against the security heuristics.
    fn classify_security(&self, obs: &RequestObservation) -> Option<SecurityEvent> {
        let status = obs.status?;
        let kind = match status {
            401 => SecurityEventKind::UnauthorizedAccess,
            429 => SecurityEventKind::RateLimitExceeded,
            400 if obs.method.eq_ignore_ascii_case("POST") && self.is_auth_url(&obs.url) => {
                SecurityEventKind::FailedAuthAttempt
            }
            _ => return None,
        };
        Some(SecurityEvent {
            kind,
            severity: kind.severity(),
            method: obs.method.clone(),
            path: obs.path().to_string(),
            client_ip: obs.client_ip.clone(),
            user_id: obs.user_id.clone(),
            status,
            timestamp: obs.timestamp,
        })
    }

    /// Returns true when the URL contains any configured auth path marker.
    fn is_auth_url(&self, url: &str) -> bool {
        self.config
            .auth_path_markers
            .iter()
            .any(|marker| url.contains(marker.as_str()))
    }
}

impl Default for RequestMonitor {
    fn default() -> Self {
        Self::new()
    }
}
