//! Phase sources.
//!
//! The engine never produces its own phase; something external owns the
//! integer and the session just reads it. [`AutoplayPhaseSource`] is the
//! built-in sensor for the demo binary: elapsed wall time mapped to a phase,
//! optionally wrapping at the end of the timeline.

use std::time::{Duration, Instant};

/// An external sensor producing the phase integer.
///
/// Monotonic under normal driving, but callers must tolerate arbitrary
/// jumps — a scroll sensor resets on tab switch, an autoplay loop wraps.
pub trait PhaseSource {
    fn current(&mut self) -> i64;
}

/// Timed autoplay: one phase per fixed step since start.
pub struct AutoplayPhaseSource {
    started: Instant,
    step: Duration,
    total: i64,
    looping: bool,
}

impl AutoplayPhaseSource {
    pub fn new(step: Duration, total: i64, looping: bool) -> Self {
        debug_assert!(total > 0, "timeline must have at least one phase");
        debug_assert!(!step.is_zero(), "autoplay step must be non-zero");
        Self {
            started: Instant::now(),
            step: step.max(Duration::from_millis(1)),
            total: total.max(1),
            looping,
        }
    }
}

impl PhaseSource for AutoplayPhaseSource {
    fn current(&mut self) -> i64 {
        let ticks = self.started.elapsed().as_millis() / self.step.as_millis().max(1);
        let ticks = i64::try_from(ticks).unwrap_or(i64::MAX);
        if self.looping {
            ticks % self.total
        } else {
            ticks.min(self.total - 1)
        }
    }
}
