//! Backoff calculation for transient-failure retries

use rand::Rng;
use std::time::Duration;

/// Exponential backoff with an upper bound and optional jitter.
///
/// `delay = initial_delay * base^(attempt-1)`, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial_delay: Duration,
    max_delay: Duration,
    base: f64,
    jitter: bool,
}

impl Backoff {
    /// Doubling backoff, the default for transient transport retries
    pub fn exponential(initial_delay: Duration, max_delay: Duration, jitter: bool) -> Self {
        Self {
            initial_delay,
            max_delay,
            base: 2.0,
            jitter,
        }
    }

    /// Calculate delay for a specific attempt (1-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_delay = self.calculate_base_delay(attempt);
        let capped_delay = base_delay.min(self.max_delay);

        if self.jitter {
            add_jitter(capped_delay)
        } else {
            capped_delay
        }
    }

    fn calculate_base_delay(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let multiplier = self.base.powi(attempt as i32 - 1);
        Duration::from_nanos((self.initial_delay.as_nanos() as f64 * multiplier) as u64)
    }
}

fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::rng();

    // +/-20% jitter
    let jitter_factor = rng.random_range(0.8..1.2);
    Duration::from_nanos((delay.as_nanos() as f64 * jitter_factor) as u64)
}
