//! Jelly physics
//!
//! Only vertical motion is simulated; the jelly's x never changes during a run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Returns `dt` if it can be integrated, `None` for zero, negative or
/// non-finite frame times.
#[inline]
pub fn sanitize_dt(dt: f32) -> Option<f32> {
    (dt.is_finite() && dt > 0.0).then_some(dt)
}

/// The player-controlled jelly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Horizontal position (constant per run)
    pub x: f32,
    /// Vertical position of the sprite's top edge (screen space, +y down)
    pub y: f32,
    /// Vertical velocity (pixels/s, negative = upward)
    pub vy: f32,
}

impl PlayerBody {
    pub fn new(x: f32, y: f32, vy: f32) -> Self {
        Self { x, y, vy }
    }

    /// Integrate one frame of motion under `gravity`.
    ///
    /// Position is advanced with the velocity from the start of the frame,
    /// then gravity is applied. Bad `dt` values leave the body untouched.
    pub fn advance(&mut self, dt: f32, gravity: f32) {
        let Some(dt) = sanitize_dt(dt) else {
            return;
        };
        self.y += self.vy * dt;
        self.vy += gravity * dt;
    }

    /// Replace the vertical velocity (a jump)
    pub fn apply_impulse(&mut self, force: f32) {
        self.vy = force;
    }

    /// Collision reference point for the given sprite offset
    pub fn reference_point(&self, offset: Vec2) -> Vec2 {
        Vec2::new(self.x, self.y) + offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_integrates_position_then_velocity() {
        let mut body = PlayerBody::new(100.0, 200.0, 100.0);
        body.advance(0.5, 1000.0);
        assert_eq!(body.y, 250.0);
        assert_eq!(body.vy, 600.0);
        assert_eq!(body.x, 100.0);
    }

    #[test]
    fn test_bad_dt_is_noop() {
        let start = PlayerBody::new(100.0, 200.0, 50.0);
        for dt in [0.0, -0.016, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let mut body = start;
            body.advance(dt, 1000.0);
            assert_eq!(body, start, "dt = {dt}");
        }
    }

    #[test]
    fn test_impulse_sets_velocity() {
        let mut body = PlayerBody::new(0.0, 0.0, 340.0);
        body.apply_impulse(-500.0);
        assert_eq!(body.vy, -500.0);
    }

    #[test]
    fn test_reference_point() {
        let body = PlayerBody::new(100.0, 55.0, 0.0);
        assert_eq!(body.reference_point(Vec2::new(58.0, 33.0)), Vec2::new(158.0, 88.0));
    }

    proptest! {
        #[test]
        fn velocity_strictly_increases(dt in 0.001f32..0.1, frames in 1usize..200, vy in -500f32..500.0) {
            let mut body = PlayerBody::new(100.0, 200.0, vy);
            let mut last = body.vy;
            for _ in 0..frames {
                body.advance(dt, 1000.0);
                prop_assert!(body.vy > last);
                last = body.vy;
            }
        }

        #[test]
        fn x_never_changes(dt in 0.0f32..0.1, frames in 1usize..50) {
            let mut body = PlayerBody::new(90.0, 0.0, 0.0);
            for _ in 0..frames {
                body.advance(dt, 1000.0);
            }
            prop_assert_eq!(body.x, 90.0);
        }
    }
}
