//! Frame pacing
//!
//! Soft frame cap: sleep off whatever is left of the target frame time, then
//! measure the real elapsed time so slow frames still integrate the full gap.

use std::time::{Duration, Instant};

/// How long to sleep after a frame that took `elapsed`.
///
/// `None` once the frame has used up its budget.
pub fn time_to_wait(elapsed: Duration, target: Duration) -> Option<Duration> {
    let wait = target.checked_sub(elapsed)?;
    (!wait.is_zero()).then_some(wait)
}

/// Tracks the last frame instant and paces the loop to a target frame time
#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            last_frame: Instant::now(),
        }
    }

    /// Start measuring from now (e.g. after a slow startup)
    pub fn reset(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Block until the target frame time has passed, then return seconds
    /// elapsed since the previous frame.
    pub fn wait_for_next_frame(&mut self) -> f32 {
        if let Some(wait) = time_to_wait(self.last_frame.elapsed(), self.target) {
            std::thread::sleep(wait);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }
}
