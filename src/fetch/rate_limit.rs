use std::thread;
use std::time::Duration;

/// Fixed delay between consecutive live fetches. The source site blocks
/// clients that hammer it, so the pipeline sleeps after every live fetch;
/// cache hits are exempt.
pub struct RateLimiter {
    delay: Duration,
}

impl RateLimiter {
    pub fn new(delay_secs: u64) -> Self {
        RateLimiter {
            delay: Duration::from_secs(delay_secs),
        }
    }

    /// The pause owed after a fetch, if any.
    fn pause_for(&self, was_cache_hit: bool) -> Option<Duration> {
        if was_cache_hit || self.delay.is_zero() {
            None
        } else {
            Some(self.delay)
        }
    }

    pub fn after_fetch(&self, was_cache_hit: bool) {
        if let Some(delay) = self.pause_for(was_cache_hit) {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_hits_never_pause() {
        let limiter = RateLimiter::new(10);
        assert_eq!(limiter.pause_for(true), None);
    }

    #[test]
    fn live_fetches_pause_for_the_configured_delay() {
        let limiter = RateLimiter::new(10);
        assert_eq!(limiter.pause_for(false), Some(Duration::from_secs(10)));
    }

    #[test]
    fn zero_delay_disables_the_limiter() {
        let limiter = RateLimiter::new(0);
        assert_eq!(limiter.pause_for(false), None);
    }
}
