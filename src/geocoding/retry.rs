use crate::geocoding::error::{GeocodeError, GeocodeOutcome};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Fixed-delay retry for geocode queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    /// Pause between attempts; constant, no backoff.
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }

    /// Whether another attempt should follow `attempts_made` failed ones.
    pub fn should_retry(&self, error: &GeocodeError, attempts_made: u32) -> bool {
        error.is_retryable() && attempts_made < self.max_attempts
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error,
    /// or runs out of attempts.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> GeocodeOutcome<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = GeocodeOutcome<T>>,
    {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match operation().await {
                Ok(value) => return Ok(value),
                Err(error) if self.should_retry(&error, attempts) => {
                    debug!(
                        "Attempt {}/{} failed ({}), retrying in {:?}",
                        attempts, self.max_attempts, error, self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                }
                Err(error) => {
                    if error.is_retryable() {
                        warn!("Giving up after {} attempts: {}", attempts, error);
                    }
                    return Err(error);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(1000))
    }
}
