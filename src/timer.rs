//! Fixed-length timer shared by inset animations and scene transitions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub elapsed: f32,
    pub duration: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Advance by `dt`, stopping at the end
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// 0 at the start, 1 when finished
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_progress() {
        let mut timer = Timer::new(0.4);
        assert_eq!(timer.progress(), 0.0);
        timer.advance(0.2);
        assert!((timer.progress() - 0.5).abs() < 0.001);
        assert!(!timer.is_finished());
        timer.advance(1.0);
        assert_eq!(timer.elapsed, 0.4);
        assert_eq!(timer.progress(), 1.0);
        assert!(timer.is_finished());
    }

    #[test]
    fn test_zero_length_timer() {
        let timer = Timer::new(0.0);
        assert!(timer.is_finished());
        assert_eq!(timer.progress(), 1.0);
    }
}
