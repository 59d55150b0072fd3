//! Fixed-interval tick gate on a monotonic clock.

use std::time::Duration;

use quanta::{Clock, Instant};

/// Reference tick interval: 400 us, a 2500 Hz per-channel update rate.
pub const DEFAULT_TICK_INTERVAL_US: u64 = 400;

/// Non-blocking "should I tick?" gate.
///
/// On a positive check the deadline advances by exactly one interval rather
/// than re-anchoring to "now", so jitter in the caller's poll rate cannot
/// accumulate into timing drift. If the caller falls more than a full
/// interval behind, the missed intervals are coalesced into a single
/// catch-up pass and the deadline re-anchors.
pub struct TickScheduler {
    clock: Clock,
    interval: Duration,
    deadline: Instant,
    slipped_ticks: u64,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(Clock::new(), interval)
    }

    /// Construct against an injected clock. Tests pair this with
    /// `quanta::Clock::mock()`.
    pub fn with_clock(clock: Clock, interval: Duration) -> Self {
        let deadline = clock.now() + interval;
        Self {
            clock,
            interval,
            deadline,
            slipped_ticks: 0,
        }
    }

    /// Check the gate. Never blocks. Returns true at most once per elapsed
    /// interval; late checks coalesce into one pass.
    pub fn should_tick(&mut self) -> bool {
        let now = self.clock.now();
        if now < self.deadline {
            return false;
        }

        self.deadline = self.deadline + self.interval;
        if self.deadline <= now {
            let behind = now.duration_since(self.deadline);
            let missed = behind.as_nanos() / self.interval.as_nanos().max(1) + 1;
            self.slipped_ticks += missed as u64;
            log::debug!("tick gate fell behind, coalescing {} missed intervals", missed);
            self.deadline = now + self.interval;
        }
        true
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Intervals that were skipped because the caller polled late.
    pub fn slipped_ticks(&self) -> u64 {
        self.slipped_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mocked(interval_us: u64) -> (TickScheduler, std::sync::Arc<quanta::Mock>) {
        let (clock, mock) = Clock::mock();
        let scheduler = TickScheduler::with_clock(clock, Duration::from_micros(interval_us));
        (scheduler, mock)
    }

    #[test]
    fn no_tick_before_interval_elapses() {
        let (mut scheduler, mock) = mocked(400);
        assert!(!scheduler.should_tick());
        mock.increment(Duration::from_micros(399));
        assert!(!scheduler.should_tick());
        mock.increment(Duration::from_micros(1));
        assert!(scheduler.should_tick());
    }

    #[test]
    fn ticks_once_per_interval_under_fast_polling() {
        let (mut scheduler, mock) = mocked(400);
        let mut ticks = 0;
        for _ in 0..4000 {
            mock.increment(Duration::from_micros(100));
            if scheduler.should_tick() {
                ticks += 1;
            }
        }
        // 400 ms of mock time at a 400 us interval.
        assert_eq!(ticks, 1000);
        assert_eq!(scheduler.slipped_ticks(), 0);
    }

    #[test]
    fn deadline_advances_by_interval_not_to_now() {
        let (mut scheduler, mock) = mocked(400);
        // Poll 150 us late every time; a drifting gate would slip 150 us per
        // tick, a fixed-interval gate stays at one tick per interval.
        let mut ticks = 0;
        for _ in 0..100 {
            mock.increment(Duration::from_micros(400));
            // Late poll partway into the next interval.
            mock.increment(Duration::from_micros(150));
            if scheduler.should_tick() {
                ticks += 1;
            }
            mock.increment(Duration::from_micros(250));
            if scheduler.should_tick() {
                ticks += 1;
            }
            // Re-align to the interval boundary.
            mock.increment(Duration::from_micros(400));
            if scheduler.should_tick() {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 300, "jittered polling changed the tick count");
    }

    #[test]
    fn late_checks_coalesce_into_one_pass() {
        let (mut scheduler, mock) = mocked(400);
        // Disappear for 10 intervals.
        mock.increment(Duration::from_micros(4000));
        assert!(scheduler.should_tick());
        assert!(scheduler.slipped_ticks() >= 8, "slip not recorded");
        // Only one catch-up pass: gate closed again immediately after.
        assert!(!scheduler.should_tick());
        mock.increment(Duration::from_micros(400));
        assert!(scheduler.should_tick());
    }
}
