// Easing function for smooth deceleration: 1 - (1-t)^3
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Eased trajectory between two angles over a fixed wall-clock window.
/// Sampling is a pure function of the timestamp, so any scheduler (frame
/// callbacks, timers, tests) can drive it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    start_angle: f64,
    target_angle: f64,
    started_at_ms: f64,
    duration_ms: f64,
}

impl SpinAnimation {
    pub fn new(start_angle: f64, target_angle: f64, started_at_ms: f64, duration_ms: u32) -> Self {
        Self {
            start_angle,
            target_angle,
            started_at_ms,
            duration_ms: f64::from(duration_ms.max(1)),
        }
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    /// Linear progress in `[0, 1]`. Clocks that step backwards read as 0.
    pub fn progress(&self, now_ms: f64) -> f64 {
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn angle_at(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.target_angle;
        }
        self.start_angle + (self.target_angle - self.start_angle) * ease_out_cubic(t)
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
