//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - dt-driven integration, bad frame times skipped
//! - Seeded RNG only
//! - Fixed per-frame order of operations
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod track;

pub use collision::{CollisionKind, Rect, check, detect, point_in_rect};
pub use physics::{PlayerBody, sanitize_dt};
pub use scoring::{Crossing, ScoreTracker};
pub use state::{GameEvent, GamePhase, RngState, RunState, Snapshot};
pub use tick::Game;
pub use track::{ObstacleTrack, Sweep, SweepStatus, recycle_offset, speed_factor};
