//! Draw-list generation
//!
//! The core never draws. Each frame it describes the scene as sprite and
//! text calls in paint order; the host backend paints them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FLAP_POSE_VELOCITY, MAX_TILT, TILT_VELOCITY};
use crate::interpolate_clamped;
use crate::sim::Game;

/// Opaque handle to an image owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle(pub u32);

/// Which jelly frame to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlapPose {
    Up,
    Mid,
    Down,
}

impl FlapPose {
    /// Pose from vertical velocity
    pub fn from_velocity(vy: f32) -> Self {
        if vy < -FLAP_POSE_VELOCITY {
            FlapPose::Up
        } else if vy > FLAP_POSE_VELOCITY {
            FlapPose::Down
        } else {
            FlapPose::Mid
        }
    }
}

/// Sprite tilt (radians): nose up when rising, down when falling
pub fn tilt(vy: f32) -> f32 {
    interpolate_clamped(vy, -TILT_VELOCITY, TILT_VELOCITY, -MAX_TILT, MAX_TILT)
}

/// Images the host has loaded so far. Anything still loading is `None`
/// and its draw call is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assets {
    pub background: Option<ImageHandle>,
    pub rock_top: Option<ImageHandle>,
    pub rock_bottom: Option<ImageHandle>,
    pub base: Option<ImageHandle>,
    pub jelly_up: Option<ImageHandle>,
    pub jelly_mid: Option<ImageHandle>,
    pub jelly_down: Option<ImageHandle>,
}

impl Assets {
    pub fn jelly(&self, pose: FlapPose) -> Option<ImageHandle> {
        match pose {
            FlapPose::Up => self.jelly_up,
            FlapPose::Mid => self.jelly_mid,
            FlapPose::Down => self.jelly_down,
        }
    }

    /// True once every image is available
    pub fn is_complete(&self) -> bool {
        [
            self.background,
            self.rock_top,
            self.rock_bottom,
            self.base,
            self.jelly_up,
            self.jelly_mid,
            self.jelly_down,
        ]
        .iter()
        .all(Option::is_some)
    }
}

/// One image placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub image: Option<ImageHandle>,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Rotation in radians around `origin`
    pub rotation: f32,
    pub origin: Vec2,
}

impl Sprite {
    fn new(image: Option<ImageHandle>, x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            image,
            x,
            y,
            w,
            h,
            rotation: 0.0,
            origin: Vec2::new(x, y),
        }
    }
}

/// One text placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCall {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

/// Everything to paint for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    /// Paint order: background, rocks, base, jelly
    pub sprites: Vec<Sprite>,
    pub score: TextCall,
}

impl DrawList {
    /// Sprites with a loaded image, paired with their handle
    pub fn drawable(&self) -> impl Iterator<Item = (ImageHandle, &Sprite)> {
        self.sprites
            .iter()
            .filter_map(|sprite| sprite.image.map(|image| (image, sprite)))
    }
}

/// Height of the sea-floor strip
const BASE_HEIGHT: f32 = 150.0;
/// How far above the bottom edge the strip starts
const BASE_INSET: f32 = 75.0;
/// Score text position
const SCORE_Y: f32 = 100.0;
const SCORE_X_OFFSET: f32 = 30.0;
/// Tilt pivot relative to the sprite origin
const TILT_PIVOT: Vec2 = Vec2::new(74.0, 88.0);

impl Game {
    /// Describe the current frame for the drawing backend
    pub fn draw_list(&self, assets: &Assets) -> DrawList {
        let config = self.config();
        let (width, height) = (config.field_width, config.field_height);
        let track = self.track();
        let player = self.player();

        let top = track.top_rect();
        let bottom = track.bottom_rect();

        let mut jelly = Sprite::new(
            assets.jelly(FlapPose::from_velocity(player.vy)),
            player.x,
            player.y,
            config.player_width,
            config.player_height,
        );
        jelly.rotation = tilt(player.vy);
        jelly.origin = Vec2::new(player.x, player.y) + TILT_PIVOT;

        let sprites = vec![
            Sprite::new(assets.background, 0.0, 0.0, width, height),
            Sprite::new(assets.rock_top, top.x, top.y, top.w, top.h),
            Sprite::new(assets.rock_bottom, bottom.x, bottom.y, bottom.w, bottom.h),
            Sprite::new(assets.base, 0.0, height - BASE_INSET, width, BASE_HEIGHT),
            jelly,
        ];

        DrawList {
            sprites,
            score: TextCall {
                text: self.score().to_string(),
                x: width / 2.0 - SCORE_X_OFFSET,
                y: SCORE_Y,
            },
        }
    }
}
