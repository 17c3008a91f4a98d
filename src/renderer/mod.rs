//! Rendering boundary
//!
//! Produces backend-agnostic draw lists; painting is the host's job.

pub mod draw_list;

pub use draw_list::{Assets, DrawList, FlapPose, ImageHandle, Sprite, TextCall, tilt};
