use std::sync::{Mutex, PoisonError};
use std::thread::sleep;
use std::time::{Duration, Instant};

pub const DEFAULT_REQUEST_DELAY_MS: u64 = 500;

/// Politeness gate between real remote calls.
///
/// Callers stamp each network round trip with [`RateLimiter::record_call`] and
/// pay with [`RateLimiter::throttle`], which sleeps until `interval` has passed
/// since the latest stamp. Cache hits never stamp, so they never cost time.
/// The limiter is `Sync`. `throttle` sleeps while holding the lock, so
/// concurrent throttles queue behind each other; `record_call` itself is not
/// gated and callers sharing a limiter must stamp only after throttling.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn record_call(&self) {
        let mut last_call = self.last_call.lock().unwrap_or_else(PoisonError::into_inner);
        *last_call = Some(Instant::now());
    }

    /// Block until the interval since the last recorded call has elapsed.
    /// Returns how long the caller was held.
    pub fn throttle(&self) -> Duration {
        let last_call = self.last_call.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(last) = *last_call else {
            return Duration::ZERO;
        };
        let wait = self.interval.saturating_sub(last.elapsed());
        if !wait.is_zero() {
            sleep(wait);
        }
        wait
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_REQUEST_DELAY_MS))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::RateLimiter;

    #[test]
    fn throttle_without_calls_is_free() {
        let limiter = RateLimiter::new(Duration::from_millis(200));
        let started = Instant::now();
        assert_eq!(limiter.throttle(), Duration::ZERO);
        assert!(started.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn throttle_waits_out_the_interval_after_a_call() {
        let limiter = RateLimiter::new(Duration::from_millis(60));
        let started = Instant::now();
        limiter.record_call();
        limiter.throttle();
        assert!(started.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn elapsed_work_counts_toward_the_interval() {
        let limiter = RateLimiter::new(Duration::from_millis(40));
        limiter.record_call();
        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(limiter.throttle(), Duration::ZERO);
    }

    #[test]
    fn concurrent_throttles_all_wait_out_a_shared_stamp() {
        let interval = Duration::from_millis(40);
        let limiter = std::sync::Arc::new(RateLimiter::new(interval));
        let started = Instant::now();
        limiter.record_call();
        let handles = (0..3)
            .map(|_| {
                let limiter = limiter.clone();
                std::thread::spawn(move || {
                    limiter.throttle();
                    started.elapsed()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            let released_at = handle.join().expect("join");
            assert!(released_at >= interval, "released after {released_at:?}");
        }
    }
}
