use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTime {
    pub elapsed_sec: f32,
    pub delta_sec: f32,
}

/// Monotonic elapsed/delta bookkeeping for the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    start: Instant,
    previous_elapsed: f32,
}

impl FrameClock {
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            previous_elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let elapsed_sec = now.duration_since(self.start).as_secs_f32();
        let delta_sec = (elapsed_sec - self.previous_elapsed).max(0.0);
        self.previous_elapsed = elapsed_sec;
        FrameTime {
            elapsed_sec,
            delta_sec,
        }
    }
}
