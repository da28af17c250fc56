//! Immutable session configuration.

use std::time::Duration;

use crate::entities::Position;
use crate::error::GameError;

pub const DEFAULT_FPS: u32 = 30;

const PROJECTILE_GLYPHS: [&str; 12] = [".", "-", "_", ":", "!", "*", "#", "@", ")", "]", "}", ">"];

const ADVERSARY_GLYPHS: [&str; 12] = ["<", "O", "X", "W", "V", "A", "Z", "|", "\\", "/", ",", ";"];

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub fps: u32,
    pub projectile_glyphs: Vec<String>,
    pub adversary_glyphs: Vec<String>,
    pub projectile_speed: i32,
    pub actor_start: Position,
    pub actor_glyph: String,
    paced: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            fps: DEFAULT_FPS,
            projectile_glyphs: PROJECTILE_GLYPHS.iter().map(|g| g.to_string()).collect(),
            adversary_glyphs: ADVERSARY_GLYPHS.iter().map(|g| g.to_string()).collect(),
            projectile_speed: 1,
            actor_start: Position::ORIGIN,
            actor_glyph: " ".to_string(),
            paced: true,
        }
    }
}

impl GameConfig {
    /// Same as the default but never sleeps between frames.
    pub fn unpaced() -> Self {
        GameConfig {
            paced: false,
            ..GameConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.projectile_glyphs.is_empty() {
            return Err(GameError::EmptyPalette("projectile"));
        }
        if self.adversary_glyphs.is_empty() {
            return Err(GameError::EmptyPalette("adversary"));
        }
        if self.projectile_speed <= 0 {
            return Err(GameError::InvalidSpeed(self.projectile_speed));
        }
        if self.fps == 0 {
            return Err(GameError::InvalidFrameRate);
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        if !self.paced || self.fps == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs(1) / self.fps
    }
}
