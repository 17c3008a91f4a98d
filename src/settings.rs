//! Game configuration
//!
//! Every tunable lives here so hosts can ship a JSON file instead of
//! recompiling. Missing keys fall back to the defaults in `consts`.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Physics ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity applied by a tap (negative = upward)
    pub jump_force: f32,
    /// Velocity at the start of the first run
    pub initial_velocity: f32,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Band above the bottom edge that counts as out of bounds
    pub floor_margin: f32,

    // === Rocks ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Seconds per sweep at speed factor 1.0
    pub sweep_base_duration: f32,
    /// Sweep end position (past the left edge)
    pub sweep_overshoot: f32,
    /// Falling below this x re-randomizes the rock offset
    pub recycle_threshold: f32,
    /// Span of the random vertical offset
    pub offset_range: f32,
    /// Score at which the sweep runs at double speed
    pub speed_score_breakpoint: u32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Collision point relative to the sprite origin
    pub reference_offset: Vec2,

    /// Fixed RNG seed (None = fresh entropy per game)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            initial_velocity: INITIAL_VELOCITY,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            floor_margin: FLOOR_MARGIN,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            sweep_base_duration: SWEEP_BASE_DURATION,
            sweep_overshoot: SWEEP_OVERSHOOT,
            recycle_threshold: RECYCLE_THRESHOLD,
            offset_range: OFFSET_RANGE,
            speed_score_breakpoint: SPEED_SCORE_BREAKPOINT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            reference_offset: Vec2::new(REFERENCE_OFFSET_X, REFERENCE_OFFSET_Y),

            seed: None,
        }
    }
}

impl GameConfig {
    /// Config for a field of the given size, everything else default
    pub fn for_field(width: f32, height: f32) -> Self {
        Self {
            field_width: width,
            field_height: height,
            ..Self::default()
        }
    }

    /// Horizontal position of the jelly (fixed for the whole run)
    pub fn player_x(&self) -> f32 {
        self.field_width / 4.0
    }

    /// Lowest jelly `y` that is still in bounds
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.floor_margin
    }

    /// Parse a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load config from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read config {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let config = GameConfig::default();
        assert_eq!(config.gravity, 1000.0);
        assert_eq!(config.jump_force, -500.0);
        assert_eq!(config.obstacle_width, 104.0);
        assert_eq!(config.obstacle_height, 640.0);
        assert_eq!(config.floor_margin, 100.0);
        assert_eq!(config.speed_score_breakpoint, 20);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "gravity": 1200.0, "seed": 7 }"#).unwrap();
        assert_eq!(config.gravity, 1200.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.jump_force, JUMP_FORCE);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(GameConfig::from_json("{ gravity: }").is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_reference_offset() {
        let config = GameConfig {
            reference_offset: Vec2::new(10.0, 20.0),
            ..GameConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = GameConfig::load("/nonexistent/tappy-jelly.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_derived_positions() {
        let config = GameConfig::for_field(360.0, 640.0);
        assert_eq!(config.player_x(), 90.0);
        assert_eq!(config.floor_y(), 540.0);
    }
}
