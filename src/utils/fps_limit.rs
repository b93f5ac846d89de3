use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Paces animation frames to a fixed interval and tracks the achieved rate.
pub struct FrameLimiter {
    interval: Duration,
    frame_timer: Instant,
    /// `None` until the first frame has been measured.
    frametime_smoothed: Option<f64>,
}

impl FrameLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            frame_timer: Instant::now(),
            frametime_smoothed: None,
        }
    }

    /// Smoothed frames per second, `None` before the first measured frame.
    pub fn fps(&self) -> Option<f64> {
        self.frametime_smoothed
            .filter(|&frametime| frametime > 0.)
            .map(|frametime| 1. / frametime)
    }

    /// Sleeps for whatever is left of the interval since the previous call.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if self.interval > before_wait {
            sleep(self.interval - before_wait);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed = Some(match self.frametime_smoothed {
            Some(smoothed) => smoothed + (frametime - smoothed) * 0.1,
            None => frametime,
        });
        self.frame_timer = Instant::now();
    }
}
