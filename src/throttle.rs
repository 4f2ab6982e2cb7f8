// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Spacing out calls to rate-limited services.

use std::time::{Duration, Instant};

use crate::airport::{Airport, CoordinateSource};

/// Recommended spacing between requests to public geocoding services.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Schedules calls so that consecutive calls start at least `min_interval` apart.
///
/// Contrary to sleeping for a fixed amount of time after every call, a caller
/// only waits when the previous call was less than `min_interval` ago.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    min_interval: Duration,
    next_slot: Option<Instant>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            next_slot: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Books the earliest available slot for a call made at `now`,
    /// and returns how long the caller must wait before making it.
    pub fn reserve(&mut self, now: Instant) -> Duration {
        let slot = match self.next_slot {
            Some(next) if next > now => next,
            _ => now,
        };
        self.next_slot = Some(slot + self.min_interval);
        slot.duration_since(now)
    }

    /// Books the earliest available slot and sleeps until it arrives.
    pub fn acquire(&mut self) {
        let wait = self.reserve(Instant::now());
        if !wait.is_zero() {
            log::debug!("rate limited, waiting {:?}", wait);
            std::thread::sleep(wait);
        }
    }
}

/// [CoordinateSource] which spaces out lookups to another source with a [RateLimiter].
#[derive(Debug, Clone)]
pub struct ThrottledSource<S> {
    source: S,
    limiter: RateLimiter,
}

impl<S> ThrottledSource<S> {
    pub fn new(source: S, limiter: RateLimiter) -> Self {
        Self { source, limiter }
    }

    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: CoordinateSource> CoordinateSource for ThrottledSource<S> {
    type Error = S::Error;

    fn lookup(&mut self, code: &str) -> Result<Option<Airport>, Self::Error> {
        self.limiter.acquire();
        self.source.lookup(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airport::AirportTable;

    #[test]
    fn first_call_is_immediate() {
        let mut limiter = RateLimiter::new(Duration::from_millis(500));
        assert_eq!(limiter.reserve(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn back_to_back_calls_are_spaced() {
        let mut limiter = RateLimiter::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert_eq!(limiter.reserve(t0), Duration::ZERO);
        assert_eq!(limiter.reserve(t0), Duration::from_millis(500));
        assert_eq!(limiter.reserve(t0), Duration::from_millis(1000));
        assert_eq!(
            limiter.reserve(t0 + Duration::from_millis(200)),
            Duration::from_millis(1300)
        );
    }

    #[test]
    fn idle_time_is_not_accumulated() {
        let mut limiter = RateLimiter::new(Duration::from_millis(500));
        let t0 = Instant::now();

        assert_eq!(limiter.reserve(t0), Duration::ZERO);
        assert_eq!(limiter.reserve(t0 + Duration::from_secs(5)), Duration::ZERO);
        assert_eq!(
            limiter.reserve(t0 + Duration::from_millis(5100)),
            Duration::from_millis(400)
        );
    }

    #[test]
    fn throttled_source_waits() {
        let mut source = ThrottledSource::new(
            AirportTable::default(),
            RateLimiter::new(Duration::from_millis(20)),
        );

        let start = Instant::now();
        for _ in 0..3 {
            assert_eq!(source.lookup("WAW").unwrap(), None);
        }
        assert!(start.elapsed() >= Duration::from_millis(40));
    }
}
