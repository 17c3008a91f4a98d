//! Rock track
//!
//! A single rock pair sweeps right-to-left forever. It is never despawned:
//! when it passes the recycle line its vertical offset is re-rolled and the
//! sweep starts again from the right edge.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::physics::sanitize_dt;
use crate::consts::{MAX_SPEED_FACTOR, MIN_SPEED_FACTOR};
use crate::interpolate_clamped;
use crate::settings::GameConfig;

/// Sweep speed multiplier for a score: 1.0 at zero, 2.0 at `breakpoint`
/// and above, linear in between.
pub fn speed_factor(score: u32, breakpoint: u32) -> f32 {
    interpolate_clamped(
        score as f32,
        0.0,
        breakpoint as f32,
        MIN_SPEED_FACTOR,
        MAX_SPEED_FACTOR,
    )
}

/// New vertical offset for a uniform `sample` in `[0, 1)`
#[inline]
pub fn recycle_offset(sample: f32, range: f32) -> f32 {
    sample * range - range / 2.0
}

/// Result of advancing a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepStatus {
    Running,
    /// Reached the end position; the caller decides whether to restart
    Completed,
}

/// Linear timed motion from `from` to `to` over `duration` seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub elapsed: f32,
}

impl Sweep {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    pub fn position(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Move forward by `dt` seconds (bad `dt` only re-reports status)
    pub fn advance(&mut self, dt: f32) -> SweepStatus {
        if let Some(dt) = sanitize_dt(dt) {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
        if self.is_complete() {
            SweepStatus::Completed
        } else {
            SweepStatus::Running
        }
    }
}

/// The scrolling rock pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTrack {
    /// Current x of both rocks
    pub x: f32,
    /// x on the previous frame (None right after a reset)
    pub prev_x: Option<f32>,
    /// Vertical shift of the gap
    pub offset: f32,
    pub width: f32,
    pub height: f32,
    field_width: f32,
    field_height: f32,
    overshoot: f32,
    base_duration: f32,
    sweep: Option<Sweep>,
}

impl ObstacleTrack {
    /// Idle track parked at the right edge
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.field_width,
            prev_x: None,
            offset: 0.0,
            width: config.obstacle_width,
            height: config.obstacle_height,
            field_width: config.field_width,
            field_height: config.field_height,
            overshoot: config.sweep_overshoot,
            base_duration: config.sweep_base_duration,
            sweep: None,
        }
    }

    /// Jump to the right edge and begin a sweep for the given speed factor
    pub fn start(&mut self, speed_factor: f32) {
        let speed = if speed_factor.is_finite() && speed_factor > 0.0 {
            speed_factor
        } else {
            MIN_SPEED_FACTOR
        };
        self.x = self.field_width;
        self.prev_x = None;
        self.sweep = Some(Sweep::new(self.field_width, self.overshoot, self.base_duration / speed));
    }

    /// Stop sweeping; the rocks stay where they are. No-op when idle.
    pub fn cancel(&mut self) {
        self.sweep = None;
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweep.is_some()
    }

    pub fn sweep(&self) -> Option<&Sweep> {
        self.sweep.as_ref()
    }

    /// Advance the sweep, returning its status (None when idle)
    pub fn advance(&mut self, dt: f32) -> Option<SweepStatus> {
        let sweep = self.sweep.as_mut()?;
        let status = sweep.advance(dt);
        self.prev_x = Some(self.x);
        self.x = sweep.position();
        Some(status)
    }

    /// Reposition the gap for the next pass
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Park at the right edge with a centred gap and no sweep
    pub fn reset(&mut self) {
        self.cancel();
        self.x = self.field_width;
        self.prev_x = None;
        self.offset = 0.0;
    }

    /// Upper rock (anchored at its vertical midpoint)
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, self.offset - self.height / 2.0, self.width, self.height)
    }

    /// Lower rock
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.field_height - self.height / 2.0 + self.offset,
            self.width,
            self.height,
        )
    }

    /// Both rocks, bottom first
    pub fn rects(&self) -> [Rect; 2] {
        [self.bottom_rect(), self.top_rect()]
    }
}
