//! Scenes shown inside the refresh overlay
//!
//! The idle `StartScene` and the Breakout `GameScene`. Exactly one is presented
//! at a time; see [`SceneKind`].

pub mod game;
pub mod start;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::timer::Timer;

pub use game::GameScene;
pub use start::StartScene;

/// Which scene the overlay presents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SceneKind {
    /// Start scene with the pull hint
    #[default]
    Idle,
    /// Breakout game scene
    Playing,
}

/// A line of text placed in a scene (position is the text's center)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub position: Vec2,
    pub font_size: f32,
    pub color: Color,
}

impl Label {
    pub fn new(text: impl Into<String>, position: Vec2, font_size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            font_size,
            color,
        }
    }
}

/// Visual style of a scene change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionKind {
    /// Previous scene splits horizontally and slides open top and bottom
    DoorsOpenVertical,
}

/// A scene change in progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneTransition {
    pub kind: TransitionKind,
    /// Scene being revealed
    pub to: SceneKind,
    pub timer: Timer,
}

impl SceneTransition {
    pub fn new(kind: TransitionKind, to: SceneKind, duration: f32) -> Self {
        Self {
            kind,
            to,
            timer: Timer::new(duration),
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.timer.advance(dt);
    }

    /// 0 at the start, 1 when finished
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }
}
