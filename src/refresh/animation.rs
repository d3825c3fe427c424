//! Timed interpolation of the container's top inset

use serde::{Deserialize, Serialize};

use crate::timer::Timer;

/// Slow start and end, fast middle
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Inset animation between two absolute values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsetAnimation {
    pub from: f32,
    pub to: f32,
    pub timer: Timer,
}

impl InsetAnimation {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            timer: Timer::new(duration),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer.advance(dt);
    }

    /// Current inset with easing applied
    pub fn value(&self) -> f32 {
        let t = ease_in_out(self.timer.progress());
        self.from + (self.to - self.from) * t
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
