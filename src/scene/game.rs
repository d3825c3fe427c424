//! Breakout scene played while a refresh is pending
//!
//! The paddle sits on the right and is moved by scrolling, blocks fill a small
//! grid on the left, and the back wall behind the paddle restarts the round
//! instead of ending the game.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Label;
use crate::consts::*;
use crate::labels::LOADING;
use crate::settings::Settings;
use crate::sim::{
    ContactEvent, ContactOutcome, ContactPair, Paddle, PhysicsWorld, clamp_velocity,
    damping_for_speed, resolve_contact_end,
};

#[derive(Debug, Clone)]
pub struct GameScene {
    size: Vec2,
    settings: Settings,
    world: PhysicsWorld,
    label: Option<Label>,
    rng: Pcg32,
    /// Unsimulated time carried between frames
    accumulator: f32,
    content_created: bool,
    is_started: bool,
    /// Completed rounds (cleared grid or missed ball)
    rounds: u32,
}

impl GameScene {
    /// Create an empty scene; contents are built when it is first presented
    pub fn new(size: Vec2, settings: &Settings, seed: u64) -> Self {
        Self {
            size,
            settings: settings.clone(),
            world: PhysicsWorld::new(size),
            label: None,
            rng: Pcg32::seed_from_u64(seed),
            accumulator: 0.0,
            content_created: false,
            is_started: false,
            rounds: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Take new colors and grid layout; existing blocks keep their tint
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.settings = settings.clone();
        if let Some(label) = &mut self.label {
            label.color = settings.text_color;
        }
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    pub fn content_created(&self) -> bool {
        self.content_created
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Frame time not yet simulated
    pub fn pending_time(&self) -> f32 {
        self.accumulator
    }

    /// Called when the scene is presented; builds the contents the first time
    pub fn did_move_to_view(&mut self) {
        if !self.content_created {
            self.create_scene_contents();
        }
    }

    /// One-time setup of walls, label, paddle, ball and blocks
    pub fn create_scene_contents(&mut self) {
        if self.content_created {
            return;
        }

        self.world.gravity = Vec2::ZERO;
        self.world.add_edge_loop();

        let back_x = self.size.x - BACK_WALL_INSET;
        self.world
            .add_back_wall(Vec2::new(back_x, 0.0), Vec2::new(back_x, self.size.y));

        self.label = Some(Label::new(
            LOADING,
            self.size / 2.0,
            TITLE_FONT_SIZE,
            self.settings.text_color,
        ));

        self.world.set_paddle(Paddle::new(Vec2::new(
            self.size.x - PADDLE_INSET,
            self.size.y / 2.0,
        )));

        self.create_ball();
        self.create_blocks();

        self.content_created = true;
        log::debug!("Game scene contents created ({}x{})", self.size.x, self.size.y);
    }

    fn create_blocks(&mut self) {
        for column in 0..self.settings.block_columns {
            let color = self.settings.block_color(column);
            for row in 0..BLOCK_ROWS {
                self.world.spawn_block(column, row, color);
            }
        }
    }

    fn create_ball(&mut self) {
        let x = self.size.x - PADDLE_INSET - BALL_SIZE;
        let y = if self.size.y > 0.0 {
            self.rng.random_range(0.0..self.size.y)
        } else {
            0.0
        };
        self.world.spawn_ball(Vec2::new(x, y));
    }

    /// Respawn the block grid and a fresh ball at rest
    pub fn reset(&mut self) {
        self.world.remove_blocks();
        self.create_blocks();
        self.world.remove_ball();
        self.create_ball();
    }

    /// Serve the ball
    pub fn start(&mut self) {
        self.is_started = true;
        if let Some(ball) = self.world.ball_mut() {
            ball.apply_impulse(START_IMPULSE);
        }
    }

    /// Set the paddle's vertical position
    pub fn move_handle(&mut self, y: f32) {
        if let Some(paddle) = self.world.paddle_mut() {
            paddle.set_y(y);
        }
    }

    pub fn update_label(&mut self, text: &str) {
        if let Some(label) = &mut self.label {
            label.text = text.to_string();
        }
    }

    pub fn is_game_won(&self) -> bool {
        self.world.block_count() == 0
    }

    /// Per-frame hook: adjust damping, then run the fixed-step simulation
    pub fn update(&mut self, dt: f32) {
        if let Some(ball) = self.world.ball_mut() {
            ball.linear_damping = damping_for_speed(ball.speed());
        }

        self.accumulator += dt.min(MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            for event in self.world.step(SIM_DT) {
                if let ContactEvent::Ended(pair) = event {
                    self.did_end_contact(pair);
                }
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop the backlog a slow host could not simulate
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
    }

    /// Apply the game rules to two bodies that just separated
    pub fn did_end_contact(&mut self, pair: ContactPair) {
        let Some(outcome) = resolve_contact_end(pair) else {
            return;
        };

        match outcome {
            ContactOutcome::Missed => {
                log::debug!("Ball missed, restarting round");
                self.rounds += 1;
                self.reset();
                self.start();
            }
            ContactOutcome::Deflected => self.clamp_ball_velocity(),
            ContactOutcome::BlockHit(id) => {
                self.clamp_ball_velocity();
                self.world.remove_block(id);
                if self.is_game_won() {
                    log::info!("Grid cleared, starting a new round");
                    self.rounds += 1;
                    self.reset();
                    self.start();
                }
            }
        }
    }

    fn clamp_ball_velocity(&mut self) {
        if let Some(ball) = self.world.ball_mut() {
            ball.vel = clamp_velocity(ball.vel);
        }
    }
}
