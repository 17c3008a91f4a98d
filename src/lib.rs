//! Tappy Jelly - a one-tap side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, rock sweep, collisions, scoring)
//! - `renderer`: Draw-list generation for an external drawing backend
//! - `settings`: Data-driven game configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use renderer::{Assets, DrawList, FlapPose, ImageHandle, Sprite, TextCall};
pub use settings::GameConfig;
pub use sim::{Game, GameEvent, GamePhase};

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f32 = 1000.0;
    /// Velocity set by a tap (negative = upward, pixels/s)
    pub const JUMP_FORCE: f32 = -500.0;
    /// Velocity the jelly has when a fresh run starts
    pub const INITIAL_VELOCITY: f32 = 100.0;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 850.0;
    /// Height of the sea floor band; touching it ends the run
    pub const FLOOR_MARGIN: f32 = 100.0;

    /// Rock (obstacle) dimensions
    pub const OBSTACLE_WIDTH: f32 = 104.0;
    pub const OBSTACLE_HEIGHT: f32 = 640.0;

    /// Jelly sprite size
    pub const PLAYER_WIDTH: f32 = 65.0;
    pub const PLAYER_HEIGHT: f32 = 47.0;
    /// Collision point relative to the sprite's top-left corner
    pub const REFERENCE_OFFSET_X: f32 = 58.0;
    pub const REFERENCE_OFFSET_Y: f32 = 33.0;

    /// Seconds for one sweep at speed factor 1.0
    pub const SWEEP_BASE_DURATION: f32 = 3.0;
    /// Where a sweep ends, past the left edge
    pub const SWEEP_OVERSHOOT: f32 = -150.0;
    /// Falling through this x recycles the rocks
    pub const RECYCLE_THRESHOLD: f32 = -100.0;
    /// Full span of the random vertical offset, centred on zero
    pub const OFFSET_RANGE: f32 = 400.0;

    /// Score at which the sweep reaches full speed
    pub const SPEED_SCORE_BREAKPOINT: u32 = 20;
    pub const MIN_SPEED_FACTOR: f32 = 1.0;
    pub const MAX_SPEED_FACTOR: f32 = 2.0;

    /// Velocity beyond which the flap pose changes
    pub const FLAP_POSE_VELOCITY: f32 = 100.0;
    /// Velocity mapped to full tilt
    pub const TILT_VELOCITY: f32 = 500.0;
    /// Maximum sprite tilt (radians)
    pub const MAX_TILT: f32 = 0.5;
}

/// Map `value` from `[in_start, in_end]` onto `[out_start, out_end]`,
/// clamping outside the input range.
#[inline]
pub fn interpolate_clamped(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    if in_end == in_start {
        return if value < in_start { out_start } else { out_end };
    }
    let t = ((value - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_clamped() {
        assert_eq!(interpolate_clamped(0.0, 0.0, 20.0, 1.0, 2.0), 1.0);
        assert_eq!(interpolate_clamped(10.0, 0.0, 20.0, 1.0, 2.0), 1.5);
        assert_eq!(interpolate_clamped(-5.0, 0.0, 20.0, 1.0, 2.0), 1.0);
        assert_eq!(interpolate_clamped(99.0, 0.0, 20.0, 1.0, 2.0), 2.0);
        // Tilt mapping saturates at full velocity
        assert_eq!(interpolate_clamped(500.0, -500.0, 500.0, -0.5, 0.5), 0.5);
    }

    #[test]
    fn test_interpolate_degenerate_range() {
        assert_eq!(interpolate_clamped(-1.0, 0.0, 0.0, 1.0, 2.0), 1.0);
        assert_eq!(interpolate_clamped(0.0, 0.0, 0.0, 1.0, 2.0), 2.0);
    }
}
