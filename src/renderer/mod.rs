//! Draw list generation
//!
//! Turns the presented scene into flat triangle lists plus text items. The host
//! uploads `vertices` as-is (see [`vertex::as_bytes`]) and lays out the labels
//! with its own text renderer. Coordinates are scene space: origin bottom left,
//! y up, `OVERLAY_HEIGHT` tall.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;

use glam::Vec2;

use crate::refresh::RefreshController;
use crate::scene::{GameScene, Label, SceneKind, StartScene};

const BALL_SEGMENTS: u32 = 16;

/// Everything needed to draw one frame of the overlay
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<Label>,
}

pub fn draw_start_scene(scene: &StartScene) -> DrawList {
    let size = scene.size();
    DrawList {
        vertices: shapes::rect(Vec2::ZERO, size, scene.background_color),
        labels: scene.labels().cloned().collect(),
    }
}

pub fn draw_game_scene(scene: &GameScene) -> DrawList {
    let settings = scene.settings();
    let world = scene.world();

    let mut vertices = shapes::rect(Vec2::ZERO, scene.size(), settings.background_color);
    let labels = scene.label().cloned().into_iter().collect();

    for block in world.blocks() {
        vertices.extend(shapes::aabb(&block.rect, block.color));
    }
    if let Some(paddle) = world.paddle() {
        vertices.extend(shapes::aabb(&paddle.rect, settings.paddle_color));
    }
    if let Some(ball) = world.ball() {
        vertices.extend(shapes::circle(ball.pos, ball.radius, settings.ball_color, BALL_SEGMENTS));
    }

    DrawList { vertices, labels }
}

/// Draw whatever the controller presents, including a running transition
pub fn draw(controller: &RefreshController) -> DrawList {
    let mut list = match controller.presented() {
        SceneKind::Idle => draw_start_scene(controller.start_scene()),
        SceneKind::Playing => draw_game_scene(controller.game_scene()),
    };

    if let Some(transition) = controller.transition() {
        list.vertices.extend(shapes::doors(
            controller.size(),
            transition.progress(),
            controller.settings().background_color,
        ));
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::refresh::ScrollContainer;
    use crate::settings::Settings;

    struct FixedList {
        offset: Vec2,
        inset_top: f32,
    }

    impl ScrollContainer for FixedList {
        fn content_offset(&self) -> Vec2 {
            self.offset
        }

        fn content_inset_top(&self) -> f32 {
            self.inset_top
        }

        fn set_content_inset_top(&mut self, inset: f32) {
            self.inset_top = inset;
        }

        fn width(&self) -> f32 {
            320.0
        }
    }

    #[test]
    fn test_start_scene_draw() {
        let mut scene = StartScene::new(Vec2::new(320.0, 100.0), &Settings::default());
        scene.did_move_to_view();
        let list = draw_start_scene(&scene);
        assert_eq!(list.vertices.len(), 6);
        assert_eq!(list.labels.len(), 2);
        assert_eq!(list.vertices[0].color, Color::WHITE.to_array());
    }

    #[test]
    fn test_game_scene_draw() {
        let mut scene = GameScene::new(Vec2::new(320.0, 100.0), &Settings::default(), 3);
        scene.did_move_to_view();
        let list = draw_game_scene(&scene);

        // background + 15 blocks + paddle, then the ball fan
        let rects = 1 + 15 + 1;
        assert_eq!(list.vertices.len(), rects * 6 + BALL_SEGMENTS as usize * 3);
        assert_eq!(list.labels[0].text, "Loading...");
        assert_eq!(list.vertices[6].color, Color::white(0.2).to_array());
        assert_eq!(list.vertices[16 * 6].color, Color::GRAY.to_array());
    }

    #[test]
    fn test_controller_draw_with_doors() {
        let mut list = FixedList {
            offset: Vec2::ZERO,
            inset_top: 0.0,
        };
        let mut controller = RefreshController::with_seed(&list, Settings::default(), 9);
        assert_eq!(draw(&controller).labels[0].text, "Pull to Break Out!");

        controller.begin_refreshing(&mut list);
        let with_doors = draw(&controller);
        let plain = draw_game_scene(controller.game_scene());
        assert_eq!(with_doors.vertices.len(), plain.vertices.len() + 12);

        for _ in 0..30 {
            controller.advance(1.0 / 60.0, &mut list);
        }
        let settled = draw(&controller);
        assert_eq!(settled.vertices.len(), draw_game_scene(controller.game_scene()).vertices.len());
    }
}
