//! Sliding-window rate limiting for search requests
//!
//! Each client identity keeps the timestamps of its requests within the
//! window. The limiter is an ordinary value created at startup and shared by
//! `Arc`; restarting the process resets every counter.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::error::DocsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Requests allowed per client within one window
    pub max_requests: usize,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_secs: 60,
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

#[derive(Debug)]
pub struct RateLimiter {
    config: RateLimitConfig,
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }

    /// Record a request from `client_id`, or reject it when over the limit
    pub fn check(&self, client_id: &str) -> Result<(), DocsError> {
        self.check_at(client_id, Instant::now())
    }

    /// Same as [`RateLimiter::check`] with an explicit clock reading
    pub fn check_at(&self, client_id: &str, now: Instant) -> Result<(), DocsError> {
        let window = self.config.window();
        let mut windows = self.windows.lock();

        // Drop identities whose every request has aged out
        windows.retain(|_, timestamps| {
            prune(timestamps, now, window);
            !timestamps.is_empty()
        });

        let timestamps = windows.entry(client_id.to_string()).or_default();

        if timestamps.len() >= self.config.max_requests {
            let oldest = timestamps.front().copied().unwrap_or(now);
            let retry_after_secs = oldest
                .checked_add(window)
                .map(|expires| ceil_secs(expires.saturating_duration_since(now)))
                .unwrap_or(self.config.window_secs)
                .max(1);

            tracing::warn!(
                "Rate limit exceeded for {}: {} requests in {}s, retry after {}s",
                client_id,
                timestamps.len(),
                self.config.window_secs,
                retry_after_secs
            );
            return Err(DocsError::RateLimited { retry_after_secs });
        }

        timestamps.push_back(now);
        Ok(())
    }

    /// Number of client identities with requests inside the window
    pub fn tracked_clients(&self) -> usize {
        self.windows.lock().len()
    }
}

fn prune(timestamps: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&oldest) = timestamps.front() {
        if now.saturating_duration_since(oldest) >= window {
            timestamps.pop_front();
        } else {
            break;
        }
    }
}

fn ceil_secs(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}
