//! Run state and game events
//!
//! Everything the presentation layer may read between frames lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::physics::PlayerBody;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Landing screen, waiting for the first tap
    Idle,
    /// Active gameplay
    Running,
    /// Run ended; the next tap restarts
    Terminated,
}

/// Per-run bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    /// Increments on every start/restart
    pub id: u32,
    /// Frames simulated in this run
    pub frames: u64,
    score: u32,
    terminated: bool,
}

impl RunState {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            frames: 0,
            score: 0,
            terminated: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Award a point. Returns false once the run has ended.
    pub fn add_point(&mut self) -> bool {
        if self.terminated {
            return false;
        }
        self.score = self.score.saturating_add(1);
        true
    }

    /// Latch the run as over. Returns true only on the first call.
    pub fn terminate(&mut self) -> bool {
        if self.terminated {
            return false;
        }
        self.terminated = true;
        true
    }
}

/// Things that happened during a call, for audio and UI hosts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First run began (start background music)
    RunStarted { run_id: u32 },
    /// A new run replaced a terminated one
    Restarted { run_id: u32 },
    /// Tap applied an upward impulse
    Jumped,
    /// Rock passed the jelly
    Scored { score: u32 },
    /// Rock re-entered from the right with a new gap offset
    ObstacleRecycled { offset: f32 },
    /// Run ended (stop music, play the game-over sting).
    /// `cause` is None when the host ended the run.
    GameOver { score: u32, cause: Option<CollisionKind> },
}

/// RNG seed wrapper so a run can be replayed from its seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed from config, or fresh entropy
    pub fn from_config(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Consistent post-update view of the game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub run_id: u32,
    pub frames: u64,
    pub score: u32,
    pub player: PlayerBody,
    pub obstacle_x: f32,
    pub obstacle_offset: f32,
}
