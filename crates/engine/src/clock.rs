//! Fixed-interval timing helpers for the driver loop.
//!
//! Both types are fed elapsed durations by the caller and never read a clock
//! themselves, so the whole loop can be simulated in tests.

use std::time::Duration;

/// Accumulates elapsed time and fires once per fall interval.
///
/// When the threshold is crossed the accumulator restarts from zero, so a long
/// stall produces a single tick rather than a burst of catch-up ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallTimer {
    interval: Duration,
    elapsed: Duration,
}

impl FallTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Add `dt` and report whether a tick is due
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

/// Caps the frame rate: tells the loop how long it may wait for input before
/// the next frame is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame: Duration,
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self { frame }
    }

    /// Time left in the current frame, given how long it has been running
    pub fn remaining(&self, since_frame_start: Duration) -> Duration {
        self.frame.saturating_sub(since_frame_start)
    }
}
