//! Pull-to-refresh state machine
//!
//! Observes drag and scroll events from the host container, decides when a
//! refresh begins or ends, animates the container's top inset and swaps the
//! presented scene between the idle start scene and the game.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::InsetAnimation;
use super::container::{RefreshDelegate, ScrollContainer};
use crate::color::Color;
use crate::consts::{AUTO_START_OFFSET, INSET_ANIMATION_SECS, OVERLAY_HEIGHT, SCENE_TRANSITION_SECS};
use crate::labels::{LOADING, LOADING_FINISHED};
use crate::scene::{GameScene, SceneKind, SceneTransition, StartScene, TransitionKind};
use crate::settings::Settings;

/// Presentation state of the overlay above the list content
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Overlay {
    /// Hidden above the content
    #[default]
    Collapsed,
    /// Inset growing to reveal the overlay
    Expanding(InsetAnimation),
    /// Fully revealed
    Expanded,
    /// Inset shrinking back
    Collapsing(InsetAnimation),
}

/// Paddle position for the given scroll state
///
/// The paddle follows the pull: at rest it sits at the overlay's top edge and
/// moves down twice as fast as the content is pulled.
#[inline]
pub fn handle_position(content_offset_y: f32, content_inset_top: f32) -> f32 {
    OVERLAY_HEIGHT - (-content_inset_top - content_offset_y) * 2.0
}

pub struct RefreshController {
    settings: Settings,
    /// Overlay size: container width by `OVERLAY_HEIGHT`
    size: Vec2,
    game: GameScene,
    start: StartScene,
    presented: SceneKind,
    transition: Option<SceneTransition>,
    overlay: Overlay,
    is_refreshing: bool,
    is_dragging: bool,
    delegate: Option<Box<dyn RefreshDelegate>>,
}

impl std::fmt::Debug for RefreshController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshController")
            .field("presented", &self.presented)
            .field("overlay", &self.overlay)
            .field("is_refreshing", &self.is_refreshing)
            .field("is_dragging", &self.is_dragging)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}

impl RefreshController {
    /// Attach a refresh overlay to `container`, presenting the start scene
    pub fn new(container: &impl ScrollContainer, settings: Settings) -> Self {
        Self::with_seed(container, settings, rand::random())
    }

    /// Same as `new`, with a fixed seed for the game's ball placement
    pub fn with_seed(container: &impl ScrollContainer, settings: Settings, seed: u64) -> Self {
        let size = Vec2::new(container.width(), OVERLAY_HEIGHT);
        let game = GameScene::new(size, &settings, seed);
        let mut start = StartScene::new(size, &settings);
        start.did_move_to_view();

        Self {
            settings,
            size,
            game,
            start,
            presented: SceneKind::Idle,
            transition: None,
            overlay: Overlay::Collapsed,
            is_refreshing: false,
            is_dragging: false,
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: impl RefreshDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    // === State ===

    pub fn is_refreshing(&self) -> bool {
        self.is_refreshing
    }

    /// True only while the overlay is fully expanded
    pub fn is_visible(&self) -> bool {
        matches!(self.overlay, Overlay::Expanded)
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn presented(&self) -> SceneKind {
        self.presented
    }

    pub fn transition(&self) -> Option<&SceneTransition> {
        self.transition.as_ref()
    }

    pub fn game_scene(&self) -> &GameScene {
        &self.game
    }

    pub fn game_scene_mut(&mut self) -> &mut GameScene {
        &mut self.game
    }

    pub fn start_scene(&self) -> &StartScene {
        &self.start
    }

    // === Configuration ===

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.propagate_settings();
    }

    pub fn force_end(&self) -> bool {
        self.settings.force_end
    }

    /// End refreshing even while the user is still dragging
    pub fn set_force_end(&mut self, force_end: bool) {
        self.settings.force_end = force_end;
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.settings.background_color = color;
        self.propagate_settings();
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.settings.text_color = color;
        self.propagate_settings();
    }

    pub fn set_paddle_color(&mut self, color: Color) {
        self.settings.paddle_color = color;
        self.propagate_settings();
    }

    pub fn set_ball_color(&mut self, color: Color) {
        self.settings.ball_color = color;
        self.propagate_settings();
    }

    /// New palette; applies to blocks created from now on
    pub fn set_block_colors(&mut self, colors: Vec<Color>) {
        self.settings.block_colors = colors;
        self.propagate_settings();
    }

    fn propagate_settings(&mut self) {
        self.game.apply_settings(&self.settings);
        self.start.apply_settings(&self.settings);
    }

    // === Refresh lifecycle ===

    /// Show the game and expand the overlay
    pub fn begin_refreshing(&mut self, container: &mut impl ScrollContainer) {
        if self.is_refreshing {
            return;
        }
        self.is_refreshing = true;
        log::info!("Refresh began");

        if self.presented != SceneKind::Playing {
            self.present(SceneKind::Playing, true);
        }
        self.game.update_label(LOADING);

        if container.content_offset().y < AUTO_START_OFFSET {
            self.game.reset();
            self.game.start();
        }

        let inset = container.content_inset_top();
        self.overlay = match self.overlay {
            Overlay::Collapsed => Overlay::Expanding(InsetAnimation::new(
                inset,
                inset + OVERLAY_HEIGHT,
                INSET_ANIMATION_SECS,
            )),
            Overlay::Collapsing(anim) => {
                Overlay::Expanding(InsetAnimation::new(inset, anim.from, INSET_ANIMATION_SECS))
            }
            other => other,
        };
    }

    /// Collapse the overlay, or mark loading finished if it cannot collapse yet
    pub fn end_refreshing(&mut self, container: &mut impl ScrollContainer) {
        if (!self.is_dragging || self.settings.force_end) && self.is_visible() {
            let inset = container.content_inset_top();
            self.overlay = Overlay::Collapsing(InsetAnimation::new(
                inset,
                inset - OVERLAY_HEIGHT,
                INSET_ANIMATION_SECS,
            ));
            log::debug!("Collapsing refresh overlay");
        } else {
            if self.is_refreshing {
                log::debug!("Refresh finished while overlay is held open");
            }
            self.game.update_label(LOADING_FINISHED);
            self.is_refreshing = false;
        }
    }

    // === Scroll events ===

    pub fn on_drag_begin(&mut self) {
        self.is_dragging = true;
    }

    /// Release of a drag; may begin refreshing and adjust where scrolling settles
    pub fn on_drag_end(
        &mut self,
        container: &mut impl ScrollContainer,
        _velocity: Vec2,
        target_offset: &mut Vec2,
    ) {
        self.is_dragging = false;

        let pulled = container.content_offset().y + container.content_inset_top();
        if !self.is_refreshing && pulled <= -OVERLAY_HEIGHT {
            self.begin_refreshing(container);
            target_offset.y = -self.target_inset(&*container);
            if let Some(delegate) = self.delegate.as_mut() {
                delegate.refresh_view_did_refresh();
            }
        }

        if !self.is_refreshing {
            self.end_refreshing(container);
        }
    }

    /// Scroll position changed; moves the paddle
    pub fn on_scroll(&mut self, container: &impl ScrollContainer) {
        let y = handle_position(container.content_offset().y, container.content_inset_top());
        self.game.move_handle(y);
    }

    /// Inset the container settles at once the running animation finishes
    fn target_inset(&self, container: &impl ScrollContainer) -> f32 {
        match self.overlay {
            Overlay::Expanding(anim) | Overlay::Collapsing(anim) => anim.to,
            Overlay::Collapsed | Overlay::Expanded => container.content_inset_top(),
        }
    }

    // === Frame ===

    /// Advance animations and the game by one host frame
    pub fn advance(&mut self, dt: f32, container: &mut impl ScrollContainer) {
        if let Some(transition) = &mut self.transition {
            transition.advance(dt);
            if transition.is_finished() {
                self.transition = None;
            }
        }

        match self.overlay {
            Overlay::Expanding(mut anim) => {
                anim.advance(dt);
                container.set_content_inset_top(anim.value());
                if anim.is_finished() {
                    self.overlay = Overlay::Expanded;
                    log::debug!("Refresh overlay expanded");
                } else {
                    self.overlay = Overlay::Expanding(anim);
                }
            }
            Overlay::Collapsing(mut anim) => {
                anim.advance(dt);
                container.set_content_inset_top(anim.value());
                if anim.is_finished() {
                    self.overlay = Overlay::Collapsed;
                    self.is_refreshing = false;
                    self.start = StartScene::new(self.size, &self.settings);
                    self.present(SceneKind::Idle, false);
                    log::info!("Refresh ended");
                } else {
                    self.overlay = Overlay::Collapsing(anim);
                }
            }
            Overlay::Collapsed | Overlay::Expanded => {}
        }

        // Incoming scene stays paused until the doors are open
        if self.presented == SceneKind::Playing && self.transition.is_none() {
            self.game.update(dt);
        }
    }

    fn present(&mut self, kind: SceneKind, animated: bool) {
        match kind {
            SceneKind::Idle => self.start.did_move_to_view(),
            SceneKind::Playing => self.game.did_move_to_view(),
        }
        self.transition = animated.then(|| {
            SceneTransition::new(TransitionKind::DoorsOpenVertical, kind, SCENE_TRANSITION_SECS)
        });
        self.presented = kind;
    }
}
