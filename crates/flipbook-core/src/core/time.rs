/// Countdown for one fixed-duration visual transition.
/// Advanced by explicit frame deltas so callers control time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTimer {
    /// Total duration in seconds.
    duration: f32,
    /// Time advanced so far.
    elapsed: f32,
}

impl TransitionTimer {
    /// Negative or NaN durations are treated as zero.
    pub fn new(duration: f32) -> Self {
        Self {
            duration: if duration > 0.0 { duration } else { 0.0 },
            elapsed: 0.0,
        }
    }

    /// Add frame time. Returns true once the timer has run out.
    /// A zero-duration timer finishes on the first call, even with `dt == 0`.
    pub fn advance(&mut self, dt: f32) -> bool {
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Seconds left before the timer runs out.
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
