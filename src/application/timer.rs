use std::time::Duration;

/// Fastest accepted tick period in milliseconds
pub const MIN_INTERVAL_MS: u64 = 100;
/// Slowest accepted tick period in milliseconds
pub const MAX_INTERVAL_MS: u64 = 2000;
/// Tick period a fresh simulator starts with
pub const DEFAULT_INTERVAL_MS: u64 = 1000;
/// Granularity of the speed controls
pub const INTERVAL_STEP_MS: u64 = 100;

/// Tick period, always within `[MIN_INTERVAL_MS, MAX_INTERVAL_MS]`.
///
/// Out-of-range requests are clamped rather than rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u64);

impl Speed {
    pub const fn from_millis(millis: u64) -> Self {
        let clamped = if millis < MIN_INTERVAL_MS {
            MIN_INTERVAL_MS
        } else if millis > MAX_INTERVAL_MS {
            MAX_INTERVAL_MS
        } else {
            millis
        };
        Self(clamped)
    }

    pub const fn millis(self) -> u64 {
        self.0
    }

    pub const fn period(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// One step shorter period
    pub const fn faster(self) -> Self {
        Self::from_millis(self.0.saturating_sub(INTERVAL_STEP_MS))
    }

    /// One step longer period
    pub const fn slower(self) -> Self {
        Self::from_millis(self.0 + INTERVAL_STEP_MS)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_MS)
    }
}

/// One-shot countdown that the simulator re-arms after every tick.
///
/// Time only moves when the owner feeds frame deltas in, so a tick can never
/// start while the previous one is still running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    period: Duration,
    elapsed: Duration,
}

impl Timer {
    /// Armed timer that fires one full period from now
    pub const fn new(speed: Speed) -> Self {
        Self {
            period: speed.period(),
            elapsed: Duration::ZERO,
        }
    }

    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Time left before the timer fires
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Accumulate `delta`; returns true when the period has been reached.
    /// Firing re-arms from zero, so a long frame yields one tick, not a burst.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.period {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
