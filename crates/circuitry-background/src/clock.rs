use std::time::{Duration, Instant};

use crate::animator::FrameTime;

/// Animation clock - counts ticks and accumulates running time.
/// Time does not advance while paused.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    elapsed: Duration,
    tick: u64,
    paused: bool,
}

impl FrameClock {
    /// Create a clock starting at `now`.
    pub fn new(now: Instant) -> Self {
        Self {
            last: now,
            elapsed: Duration::ZERO,
            tick: 0,
            paused: false,
        }
    }

    /// Advance to `now` and return the next tick.
    /// While paused the tick and time stay where they are.
    pub fn advance(&mut self, now: Instant) -> FrameTime {
        if !self.paused {
            self.elapsed += now.saturating_duration_since(self.last);
            self.tick += 1;
        }
        self.last = now;
        self.time()
    }

    /// The current tick without advancing.
    pub fn time(&self) -> FrameTime {
        FrameTime {
            tick: self.tick,
            seconds: self.elapsed.as_secs_f64(),
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggle pause. Time spent paused is never counted.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.paused = !self.paused;
        self.last = now;
    }
}
