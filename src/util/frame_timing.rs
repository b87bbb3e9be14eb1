use web_time::{Duration, Instant};

/// Frame timing: per-frame delta, smoothed FPS and optional frame limiting.
///
/// Hosts that do not get a frame delta from their engine can use this to
/// produce the `dt` that [`CameraRig::update`](crate::camera::CameraRig::update)
/// expects.
pub struct FrameTiming {
    /// Minimum frame duration based on target FPS (zero = unlimited).
    min_frame_duration: Duration,
    /// Last frame timestamp.
    last_frame: Instant,
    /// Duration of the last completed frame, in seconds.
    last_dt: f32,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            last_dt: 0.0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to start another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Time left before the next frame is due.
    #[must_use]
    pub fn time_until_next_frame(&self) -> Duration {
        self.min_frame_duration
            .saturating_sub(self.last_frame.elapsed())
    }

    /// Close the current frame and return its duration in seconds.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.last_dt = dt;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        dt
    }

    /// Duration of the last completed frame, in seconds.
    #[must_use]
    pub fn dt(&self) -> f32 {
        self.last_dt
    }

    /// The current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
