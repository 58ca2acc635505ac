//! Fixed-rate event scheduling under a variable frame delta.

use serde::{Deserialize, Serialize};

/// Carry-over accumulator that converts variable frame deltas into a
/// fixed-rate event stream.
///
/// Each call to [`tick`](Self::tick) adds the frame delta and emits one
/// event per full `interval` contained in the running total, subtracting
/// as it goes. The remainder carries over, so the long-run emission rate
/// is exactly `1 / interval` and a stalled frame catches up (a frame of
/// `3 * interval` emits 3 events) instead of dropping events.
///
/// `interval <= 0` disables the scheduler entirely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickAccumulator {
    interval: f32,
    elapsed: f32,
}

impl TickAccumulator {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Scheduler emitting `rate` events per second.
    pub fn per_second(rate: f32) -> Self {
        if rate > 0.0 {
            Self::new(1.0 / rate)
        } else {
            Self::new(0.0)
        }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Change the interval. The carried remainder is kept.
    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval;
    }

    /// Advance by `dt` seconds and return how many events are due.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.interval <= 0.0 {
            return 0;
        }
        self.elapsed += dt.max(0.0);
        let mut count = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            count += 1;
        }
        count
    }
}
