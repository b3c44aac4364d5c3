//! Exponential backoff with jitter for throttled requests.
//!
//! [`Backoff`] produces the wait before each retry of a 429 response. Delays
//! grow by `factor` from `min` up to `max`. With jitter enabled, each delay is
//! drawn uniformly between the previous delay and the current ceiling, so the
//! sequence never decreases and never leaves `[min, max]`.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use shopify_client::clients::{Backoff, BackoffConfig};
//!
//! let mut backoff = Backoff::new(BackoffConfig {
//!     jitter: false,
//!     ..BackoffConfig::default()
//! });
//!
//! assert_eq!(backoff.next_delay(), Duration::from_millis(100));
//! assert_eq!(backoff.next_delay(), Duration::from_millis(200));
//! assert_eq!(backoff.next_delay(), Duration::from_millis(400));
//!
//! backoff.reset();
//! assert_eq!(backoff.next_delay(), Duration::from_millis(100));
//! ```

use std::time::Duration;

use rand::Rng;

/// Default maximum number of retries for a throttled request.
pub const MAX_RETRIES: u32 = 3;

/// Bounds and growth rate of a [`Backoff`] sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackoffConfig {
    /// First delay, and the lower bound of every delay.
    pub min: Duration,
    /// Upper bound of every delay.
    pub max: Duration,
    /// Multiplier applied per attempt. Values below 1 are treated as 1.
    pub factor: f64,
    /// Randomize delays to spread retries from concurrent callers.
    pub jitter: bool,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(100),
            max: Duration::from_secs(2),
            factor: 2.0,
            jitter: true,
        }
    }
}

/// How a client retries throttled (429) requests.
///
/// Retry state is created per logical call, so `max_retries` bounds each
/// request independently.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; `0` disables retrying.
    pub max_retries: u32,
    /// Delay schedule between attempts.
    pub backoff: BackoffConfig,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            backoff: BackoffConfig::default(),
        }
    }
}

/// A stateful delay generator.
///
/// Call [`next_delay`](Self::next_delay) before each retry and
/// [`reset`](Self::reset) once a request goes through unthrottled if the same
/// generator is reused for another operation. [`HttpClient`] builds a fresh
/// generator for every request, so it never needs to reset.
///
/// `Backoff` is also an endless [`Iterator`] of delays.
///
/// [`HttpClient`]: crate::clients::HttpClient
#[derive(Clone, Debug)]
pub struct Backoff {
    config: BackoffConfig,
    attempt: u32,
    last: Duration,
}

impl Backoff {
    /// Creates a generator positioned at the first delay.
    #[must_use]
    pub fn new(config: BackoffConfig) -> Self {
        let config = BackoffConfig {
            max: config.max.max(config.min),
            factor: if config.factor.is_finite() {
                config.factor.max(1.0)
            } else {
                1.0
            },
            ..config
        };
        Self {
            config,
            attempt: 0,
            last: config.min,
        }
    }

    /// Returns the next delay and advances the sequence.
    pub fn next_delay(&mut self) -> Duration {
        let ceiling = self.ceiling(self.attempt);
        self.attempt = self.attempt.saturating_add(1);

        let delay = if self.config.jitter && ceiling > self.last {
            rand::thread_rng().gen_range(self.last..=ceiling)
        } else {
            ceiling
        };
        self.last = delay;
        delay
    }

    /// Rewinds the sequence to its first delay.
    pub fn reset(&mut self) {
        self.attempt = 0;
        self.last = self.config.min;
    }

    /// Number of delays handed out since creation or the last reset.
    #[must_use]
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// The (normalized) configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &BackoffConfig {
        &self.config
    }

    fn ceiling(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return self.config.min;
        }
        let min = self.config.min.as_secs_f64();
        let max = self.config.max.as_secs_f64();
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let scaled = min * self.config.factor.powi(exponent);

        if !scaled.is_finite() || scaled >= max {
            self.config.max
        } else {
            Duration::from_secs_f64(scaled).clamp(self.config.min, self.config.max)
        }
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_jitter() -> BackoffConfig {
        BackoffConfig {
            jitter: false,
            ..BackoffConfig::default()
        }
    }

    #[test]
    fn test_delays_double_until_max() {
        let delays: Vec<Duration> = Backoff::new(no_jitter()).take(7).collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_millis(100),
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(800),
                Duration::from_millis(1600),
                Duration::from_secs(2),
                Duration::from_secs(2),
            ]
        );
    }

    #[test]
    fn test_reset_returns_to_min() {
        let mut backoff = Backoff::new(no_jitter());
        backoff.next_delay();
        backoff.next_delay();
        assert_eq!(backoff.attempt(), 2);

        backoff.reset();
        assert_eq!(backoff.attempt(), 0);
        assert_eq!(backoff.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_jittered_delays_are_bounded_and_non_decreasing() {
        let config = BackoffConfig::default();

        for _ in 0..50 {
            let delays: Vec<Duration> = Backoff::new(config).take(10).collect();
            for pair in delays.windows(2) {
                assert!(pair[0] <= pair[1], "delays decreased: {delays:?}");
            }
            for delay in &delays {
                assert!(*delay >= config.min && *delay <= config.max);
            }
        }
    }

    #[test]
    fn test_first_jittered_delay_is_min() {
        let mut backoff = Backoff::new(BackoffConfig::default());
        assert_eq!(backoff.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_inverted_bounds_are_normalized() {
        let backoff = Backoff::new(BackoffConfig {
            min: Duration::from_secs(3),
            max: Duration::from_secs(1),
            factor: 0.5,
            jitter: false,
        });

        assert_eq!(backoff.config().max, Duration::from_secs(3));
        assert!((backoff.config().factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_large_attempt_counts_saturate_at_max() {
        let mut backoff = Backoff::new(no_jitter());
        for _ in 0..200 {
            backoff.next_delay();
        }
        assert_eq!(backoff.next_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_default_retry_policy() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.backoff, BackoffConfig::default());
    }
}
