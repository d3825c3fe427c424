//! Breakout to Refresh - a pull-to-refresh control that plays Breakout while loading
//!
//! Core modules:
//! - `sim`: Physics world (ball, paddle, blocks, walls) and contact resolution
//! - `scene`: The idle start scene and the Breakout game scene
//! - `refresh`: Scroll-driven refresh state machine and host container traits
//! - `renderer`: Draw list generation for the host renderer
//! - `settings`: Colors and behaviour flags
//! - `timer`: Fixed-length timer behind animations and transitions

pub mod color;
pub mod refresh;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod timer;

pub use color::Color;
pub use refresh::{RefreshController, RefreshDelegate, ScrollContainer};
pub use scene::{GameScene, SceneKind, StartScene};
pub use settings::{Settings, Theme};

/// Widget configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (120 Hz for stable contacts)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the game scene will integrate in one update
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Height of the overlay, and how far the top inset grows when it opens
    pub const OVERLAY_HEIGHT: f32 = 100.0;
    /// Duration of the inset expand/collapse animation (seconds)
    pub const INSET_ANIMATION_SECS: f32 = 0.4;
    /// Duration of the doors transition into the game scene (seconds)
    pub const SCENE_TRANSITION_SECS: f32 = 0.4;
    /// Pulled further than this offset, beginning a refresh also serves the ball
    pub const AUTO_START_OFFSET: f32 = -60.0;

    /// Paddle defaults - sits near the right edge, moved by scrolling
    pub const PADDLE_WIDTH: f32 = 5.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;
    /// Distance from the right edge of the scene to the paddle center
    pub const PADDLE_INSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 8.0;
    pub const BALL_RADIUS: f32 = 4.0;
    pub const BALL_MASS: f32 = 0.0015;
    /// Impulse applied to serve the ball
    pub const START_IMPULSE: Vec2 = Vec2::new(-0.5, 0.2);
    /// Above this speed the ball gets linear damping
    pub const MAX_BALL_SPEED: f32 = 600.0;
    pub const HIGH_SPEED_DAMPING: f32 = 0.4;
    /// Axis speeds inside (-MIN, MIN) are pushed out to MIN + 1 after a contact
    pub const MIN_AXIS_SPEED: f32 = 20.0;

    /// Block grid
    pub const BLOCK_WIDTH: f32 = 5.0;
    pub const BLOCK_HEIGHT: f32 = 19.0;
    pub const BLOCK_COLUMNS: usize = 3;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_ORIGIN: Vec2 = Vec2::new(20.0, 10.0);
    pub const BLOCK_SPACING: Vec2 = Vec2::new(6.0, 20.0);

    /// Back wall sits this far inside the right edge, behind the paddle
    pub const BACK_WALL_INSET: f32 = 1.0;

    /// Label sizes
    pub const TITLE_FONT_SIZE: f32 = 20.0;
    pub const DESCRIPTION_FONT_SIZE: f32 = 17.0;
    /// Vertical gap between the start title and its description
    pub const DESCRIPTION_OFFSET: f32 = 20.0;
}

/// Text shown by the scenes
pub mod labels {
    pub const LOADING: &str = "Loading...";
    pub const LOADING_FINISHED: &str = "Loading Finished";
    pub const PULL_TO_BREAK_OUT: &str = "Pull to Break Out!";
    pub const SCROLL_TO_MOVE_HANDLE: &str = "Scroll to move handle";
}
