//! Fundamental timing and animation types.

use serde::{Deserialize, Serialize};

/// Scene time tracking.
///
/// `elapsed_secs` is always derived from the tick counter so that long
/// sessions never accumulate floating-point drift.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed scene time in seconds (tick * dt).
    pub elapsed_secs: f32,
}

impl SceneTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f32 {
        1.0 / crate::constants::TICK_RATE as f32
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs = self.tick as f32 * self.dt();
    }

    /// Scene seconds corresponding to a tick number.
    pub fn secs_at(tick: u64) -> f32 {
        tick as f32 / crate::constants::TICK_RATE as f32
    }
}

/// Easing curve shapes used by scripted animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// Fast start, decelerating finish.
    CubicOut,
    /// Slow start and finish, fast middle.
    CubicInOut,
}

impl Ease {
    /// Map normalized progress `t` in [0, 1] through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::CubicOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}

/// A scalar animation between two values, anchored to a start tick.
///
/// Tweens are plain data: systems evaluate them against the current
/// [`SceneTime`] and write the result wherever it belongs. Retargeting
/// is done by replacing the tween with a new one starting from the
/// value it currently evaluates to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_tick: u64,
    pub duration_secs: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_tick: u64, duration_secs: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_tick,
            duration_secs,
            ease,
        }
    }

    /// Normalized progress in [0, 1] at the given time.
    pub fn progress(&self, time: &SceneTime) -> f32 {
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        let started = SceneTime::secs_at(self.start_tick);
        ((time.elapsed_secs - started) / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Eased value at the given time.
    pub fn value_at(&self, time: &SceneTime) -> f32 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress(time))
    }

    /// Whether the tween has run its full duration.
    pub fn finished(&self, time: &SceneTime) -> bool {
        self.progress(time) >= 1.0
    }
}
