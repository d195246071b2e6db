use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Interpolation curve applied to a [`Tween`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOut,
}

impl Easing {
    fn apply(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Time-based interpolation of a single scalar.
///
/// The tween never reads the clock itself; callers pass the frame instant so
/// that progress is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(
        from: f32,
        to: f32,
        started_at: Instant,
        duration: Duration,
        easing: Easing,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.progress(now));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Multiply both endpoints by `factor`, keeping the timing.
    ///
    /// Every sample scales by the same factor, so a value measured against
    /// one extent stays proportional after the extent changes.
    pub(crate) fn scale(&mut self, factor: f32) {
        self.from *= factor;
        self.to *= factor;
    }
}
