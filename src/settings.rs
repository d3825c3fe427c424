//! Refresh control appearance and behaviour
//!
//! Colors apply to both scenes; block colors are picked per grid column.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::BLOCK_COLUMNS;

/// Greys used for block columns the palette does not cover
pub const DEFAULT_BLOCK_COLORS: [Color; 3] = [Color::white(0.2), Color::white(0.4), Color::white(0.6)];

/// Built-in color themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Night,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Night => "Night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" | "default" => Some(Theme::Light),
            "night" | "dark" => Some(Theme::Night),
            _ => None,
        }
    }
}

/// Refresh control settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Colors ===
    pub background_color: Color,
    pub text_color: Color,
    pub paddle_color: Color,
    pub ball_color: Color,
    /// Block tint per column (index 0 = leftmost column)
    pub block_colors: Vec<Color>,

    // === Layout ===
    /// Number of block columns in the grid
    pub block_columns: usize,

    // === Behaviour ===
    /// Collapse on `end_refreshing` even while the user is still dragging
    pub force_end: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            text_color: Color::BLACK,
            paddle_color: Color::GRAY,
            ball_color: Color::BLACK,
            block_colors: DEFAULT_BLOCK_COLORS.to_vec(),
            block_columns: BLOCK_COLUMNS,
            force_end: false,
        }
    }
}

impl Settings {
    /// Create settings from a theme
    pub fn from_theme(theme: Theme) -> Self {
        let mut settings = Self::default();
        settings.apply_theme(theme);
        settings
    }

    /// Apply a theme's colors (layout and behaviour are left alone)
    pub fn apply_theme(&mut self, theme: Theme) {
        match theme {
            Theme::Light => {
                let defaults = Self::default();
                self.background_color = defaults.background_color;
                self.text_color = defaults.text_color;
                self.paddle_color = defaults.paddle_color;
                self.ball_color = defaults.ball_color;
                self.block_colors = defaults.block_colors;
            }
            Theme::Night => {
                self.background_color = Color::from_hsb(0.68, 0.9, 0.3);
                self.text_color = Color::WHITE;
                self.paddle_color = Color::LIGHT_GRAY;
                self.ball_color = Color::WHITE;
                self.block_colors = vec![
                    Color::from_hsb(0.17, 0.9, 1.0),
                    Color::from_hsb(0.17, 0.7, 1.0),
                    Color::from_hsb(0.17, 0.5, 1.0),
                ];
            }
        }
    }

    /// Color for blocks in the given column, falling back to the default greys
    pub fn block_color(&self, column: usize) -> Color {
        self.block_colors.get(column).copied().unwrap_or_else(|| {
            DEFAULT_BLOCK_COLORS[column.min(DEFAULT_BLOCK_COLORS.len() - 1)]
        })
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        log::debug!(
            "Loaded settings ({} block colors, {} columns)",
            settings.block_colors.len(),
            settings.block_columns
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.background_color, Color::WHITE);
        assert_eq!(settings.text_color, Color::BLACK);
        assert_eq!(settings.block_columns, 3);
        assert!(!settings.force_end);
    }

    #[test]
    fn test_short_palette_falls_back_to_grey() {
        let settings = Settings {
            block_colors: vec![Color::rgba(1.0, 0.0, 0.0, 1.0), Color::rgba(0.0, 1.0, 0.0, 1.0)],
            ..Default::default()
        };
        assert_eq!(settings.block_color(0), Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(settings.block_color(1), Color::rgba(0.0, 1.0, 0.0, 1.0));
        assert_eq!(settings.block_color(2), Color::white(0.6));
    }

    #[test]
    fn test_empty_palette_uses_column_greys() {
        let settings = Settings {
            block_colors: Vec::new(),
            ..Default::default()
        };
        assert_eq!(settings.block_color(0), Color::white(0.2));
        assert_eq!(settings.block_color(1), Color::white(0.4));
        assert_eq!(settings.block_color(3), Color::white(0.6));
    }

    #[test]
    fn test_json_partial_fields() {
        let settings = Settings::from_json(r#"{"force_end": true, "block_columns": 4}"#).unwrap();
        assert!(settings.force_end);
        assert_eq!(settings.block_columns, 4);
        assert_eq!(settings.paddle_color, Color::GRAY);

        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_json_rejects_garbage() {
        assert!(Settings::from_json("{not json").is_err());
    }

    #[test]
    fn test_theme_names() {
        assert_eq!(Theme::from_str("DARK"), Some(Theme::Night));
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("sepia"), None);
        assert_eq!(Theme::Night.as_str(), "Night");

        let night = Settings::from_theme(Theme::Night);
        assert_eq!(night.text_color, Color::WHITE);
        assert_eq!(night.block_colors.len(), 3);
    }
}
