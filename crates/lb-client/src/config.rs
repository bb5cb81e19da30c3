//! Client and session configuration.

use std::time::Duration;

use lb_core::Building;

/// Public endpoint of the simulation service.
pub const DEFAULT_API_URL: &str = "https://dianti.secondspace.dev/api";

// ── RetryPolicy ───────────────────────────────────────────────────────────────

/// Bounded exponential backoff for transport failures.
///
/// Attempt `n` (0-based, counting retries only) waits
/// `min(initial_backoff * 2^n, max_backoff)` before re-sending.
#[derive(Clone, Debug)]
pub struct RetryPolicy {
    /// Retries after the first attempt.  `0` disables retrying.
    pub max_retries:     u32,
    pub initial_backoff: Duration,
    pub max_backoff:     Duration,
}

impl RetryPolicy {
    /// Never retry; the first transport failure is fatal.
    pub fn none() -> Self {
        Self {
            max_retries:     0,
            initial_backoff: Duration::ZERO,
            max_backoff:     Duration::ZERO,
        }
    }

    /// Delay before retry number `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.initial_backoff
            .checked_mul(factor)
            .unwrap_or(self.max_backoff)
            .min(self.max_backoff)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries:     3,
            initial_backoff: Duration::from_millis(500),
            max_backoff:     Duration::from_secs(8),
        }
    }
}

// ── ClientConfig ──────────────────────────────────────────────────────────────

/// How to reach the service.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,

    /// Per-request timeout.  Expiry counts as a transport failure.
    pub timeout: Duration,

    pub retry: RetryPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(30),
            retry:   RetryPolicy::default(),
        }
    }
}

// ── SessionParams ─────────────────────────────────────────────────────────────

/// Identifying fields sent when opening a session.
#[derive(Clone, Debug)]
pub struct SessionParams {
    /// Each event has its own high-score board.
    pub event:    String,
    pub building: Building,
    /// Bot name shown on the high-score board.
    pub bot:      String,
    pub email:    String,
    /// Sandbox runs are excluded from high scores and replays.
    pub sandbox:  bool,
}
