//! Timing for the simulator loop.
//!
//! The common crate takes time as plain milliseconds; `std::time` stays here.

use std::time::{Duration, Instant};

/// Target frame time (~50 FPS). The main loop sleeps if frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Monotonic millisecond clock starting at zero.
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self { Self { start: Instant::now() } }

    pub fn now_ms(&self) -> u64 { u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX) }
}
