//! Collision detection
//!
//! The jelly is sampled as a single reference point once per frame. There is
//! no swept test: at very low frame rates a fast rock can skip past the point
//! between two frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::physics::PlayerBody;
use crate::settings::GameConfig;

/// Axis-aligned rectangle (screen space, +y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Boundary-inclusive containment
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point_in_rect(point, self)
    }
}

/// Whether `point` lies inside `rect`, edges included
#[inline]
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    point.x >= rect.x && point.x <= rect.x + rect.w && point.y >= rect.y && point.y <= rect.y + rect.h
}

/// What the jelly hit, if anything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Above the top edge or into the floor band
    Bounds,
    /// Reference point inside a rock
    Obstacle,
}

/// Bounds check on the raw sprite position
#[inline]
pub fn out_of_bounds(player: &PlayerBody, config: &GameConfig) -> bool {
    player.y < 0.0 || player.y > config.floor_y()
}

/// Full collision verdict for one frame
pub fn detect(player: &PlayerBody, obstacles: &[Rect], config: &GameConfig) -> Option<CollisionKind> {
    if out_of_bounds(player, config) {
        return Some(CollisionKind::Bounds);
    }

    let point = player.reference_point(config.reference_offset);
    if obstacles.iter().any(|rect| point_in_rect(point, rect)) {
        return Some(CollisionKind::Obstacle);
    }

    None
}

/// `true` if the run should end this frame
#[inline]
pub fn check(player: &PlayerBody, obstacles: &[Rect], config: &GameConfig) -> bool {
    detect(player, obstacles, config).is_some()
}
