//! Sleep-based frame limiter

use std::time::{Duration, Instant};

use crate::platform::FrameClock;

/// Caps the loop rate by sleeping off whatever is left of each frame
#[derive(Debug, Clone)]
pub struct SleepClock {
    last: Instant,
}

impl SleepClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Target duration of one frame
    pub fn frame_duration(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }
}

impl Default for SleepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SleepClock {
    fn delay_to_maintain_rate(&mut self, fps: u32) {
        let frame = Self::frame_duration(fps);
        let elapsed = self.last.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
        self.last = Instant::now();
    }
}
