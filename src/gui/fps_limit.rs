use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and measures the time between frames.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    last_frametime: f64,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            last_frametime: 0.,
            frametime_smoothed: 0.,
        }
    }

    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed > 0. {
            1. / self.frametime_smoothed
        } else {
            0.
        }
    }

    /// Seconds the previous frame took, sleep included.
    pub fn last_frametime(&self) -> f64 {
        self.last_frametime
    }

    /// Sleeps away what is left of the frame budget and starts a new frame.
    pub fn end_frame(&mut self) {
        let busy = self.frame_timer.elapsed();
        if let Some(rest) = self.target_frametime.checked_sub(busy) {
            sleep(rest);
        }

        self.last_frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (self.last_frametime - self.frametime_smoothed) * 0.1;
        self.frame_timer = Instant::now();
    }
}
