//! Idle scene shown while no refresh is running

use glam::Vec2;

use super::Label;
use crate::color::Color;
use crate::consts::{DESCRIPTION_FONT_SIZE, DESCRIPTION_OFFSET, TITLE_FONT_SIZE};
use crate::labels::{PULL_TO_BREAK_OUT, SCROLL_TO_MOVE_HANDLE};
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct StartScene {
    size: Vec2,
    pub background_color: Color,
    text_color: Color,
    title: Option<Label>,
    description: Option<Label>,
    content_created: bool,
}

impl StartScene {
    pub fn new(size: Vec2, settings: &Settings) -> Self {
        Self {
            size,
            background_color: settings.background_color,
            text_color: settings.text_color,
            title: None,
            description: None,
            content_created: false,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Called when the scene is presented; builds the labels the first time
    pub fn did_move_to_view(&mut self) {
        if !self.content_created {
            self.create_scene_contents();
        }
    }

    pub fn create_scene_contents(&mut self) {
        if self.content_created {
            return;
        }
        let center = self.size / 2.0;
        self.title = Some(Label::new(
            PULL_TO_BREAK_OUT,
            center,
            TITLE_FONT_SIZE,
            self.text_color,
        ));
        self.description = Some(Label::new(
            SCROLL_TO_MOVE_HANDLE,
            center - Vec2::new(0.0, DESCRIPTION_OFFSET),
            DESCRIPTION_FONT_SIZE,
            self.text_color,
        ));
        self.content_created = true;
    }

    pub fn content_created(&self) -> bool {
        self.content_created
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Recolor both labels
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
        for label in [&mut self.title, &mut self.description].into_iter().flatten() {
            label.color = color;
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.background_color = settings.background_color;
        self.set_text_color(settings.text_color);
    }

    /// Labels in draw order
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.title.iter().chain(self.description.iter())
    }
}
