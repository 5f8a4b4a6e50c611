use std::time::Duration;

pub const SPLASH_TICK: Duration = Duration::from_millis(200);
pub const SPLASH_FAILSAFE: Duration = Duration::from_secs(3);
pub const SPLASH_HOLD: Duration = Duration::from_millis(500);
pub const SPLASH_STEP_MIN: f64 = 10.0;
pub const SPLASH_STEP_SPREAD: f64 = 15.0;

/// Next progress value for a `roll` in `[0, 1)`. Each tick adds 10 to 25 points.
pub fn splash_step(progress: f64, roll: f64) -> f64 {
    (progress + roll.clamp(0.0, 1.0) * SPLASH_STEP_SPREAD + SPLASH_STEP_MIN).min(100.0)
}

/// Loading screen shown on the first visit of a browser session.
#[derive(Debug, Clone, Default)]
pub struct Splash {
    progress: f64,
    elapsed: Duration,
    completed_at: Option<Duration>,
}

impl Splash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// One interval tick. Ticks after completion are ignored.
    pub fn tick(&mut self, roll: f64) {
        if self.is_complete() {
            return;
        }

        self.elapsed += SPLASH_TICK;
        self.progress = splash_step(self.progress, roll);

        if self.progress >= 100.0 {
            self.completed_at = Some(self.elapsed);
        }
    }

    /// Whether the overlay is still shown `now` after mount.
    pub fn is_visible(&self, now: Duration) -> bool {
        match self.completed_at {
            Some(at) => now < at + SPLASH_HOLD,
            None => now < SPLASH_FAILSAFE,
        }
    }
}
