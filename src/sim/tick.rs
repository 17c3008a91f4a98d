//! Game loop controller
//!
//! `Game` owns all run state. Hosts drive it with `on_frame` and `on_tap`;
//! both take `&mut self`, so frames and input are serialized and readers
//! only ever see state between calls.
//!
//! Per-frame order while running:
//! 1. jelly physics
//! 2. rock sweep
//! 3. collision (ends the run on a hit)
//! 4. scoring, then recycle / sweep restart

use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{self, CollisionKind};
use super::physics::{PlayerBody, sanitize_dt};
use super::scoring::{Crossing, ScoreTracker};
use super::state::{GameEvent, GamePhase, RngState, RunState, Snapshot};
use super::track::{ObstacleTrack, SweepStatus, recycle_offset, speed_factor};
use crate::settings::GameConfig;

type GameOverCallback = Box<dyn FnMut(u32)>;

/// The game: jelly, rocks, score and the phase state machine
pub struct Game {
    config: GameConfig,
    phase: GamePhase,
    player: PlayerBody,
    track: ObstacleTrack,
    run: RunState,
    scoring: ScoreTracker,
    recycle: Crossing,
    rng_state: RngState,
    rng: Pcg32,
    events: Vec<GameEvent>,
    on_game_over: Option<GameOverCallback>,
}

impl Game {
    /// Create an idle game
    pub fn new(config: GameConfig) -> Self {
        let rng_state = RngState::from_config(config.seed);
        let rng = rng_state.to_rng();
        Self {
            phase: GamePhase::Idle,
            player: PlayerBody::new(
                config.player_x(),
                config.field_height / 4.0,
                config.initial_velocity,
            ),
            track: ObstacleTrack::new(&config),
            run: RunState::new(0),
            scoring: ScoreTracker::new(config.player_x()),
            recycle: Crossing::below(config.recycle_threshold),
            rng_state,
            rng,
            events: Vec::new(),
            on_game_over: None,
            config,
        }
    }

    /// Register the game-over callback (fires once per run with the final score)
    pub fn set_on_game_over<F>(&mut self, callback: F)
    where
        F: FnMut(u32) + 'static,
    {
        self.on_game_over = Some(Box::new(callback));
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn track(&self) -> &ObstacleTrack {
        &self.track
    }

    pub fn run(&self) -> &RunState {
        &self.run
    }

    pub fn score(&self) -> u32 {
        self.run.score()
    }

    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    /// Sweep speed for the current score
    pub fn speed_factor(&self) -> f32 {
        speed_factor(self.run.score(), self.config.speed_score_breakpoint)
    }

    /// Take the events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            run_id: self.run.id,
            frames: self.run.frames,
            score: self.run.score(),
            player: self.player,
            obstacle_x: self.track.x,
            obstacle_offset: self.track.offset,
        }
    }

    /// Idle -> Running. Ignored in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            log::debug!("start ignored in {:?}", self.phase);
            return false;
        }
        let y = self.config.field_height / 4.0;
        let vy = self.config.initial_velocity;
        self.begin_run(y, vy);
        log::info!("Run {} started (seed {})", self.run.id, self.rng_state.seed);
        self.events.push(GameEvent::RunStarted { run_id: self.run.id });
        true
    }

    /// Terminated -> Running. Ignored in any other phase.
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::Terminated {
            log::debug!("restart ignored in {:?}", self.phase);
            return false;
        }
        let y = self.config.field_height / 3.0;
        self.begin_run(y, 0.0);
        log::info!("Run {} started (restart)", self.run.id);
        self.events.push(GameEvent::Restarted { run_id: self.run.id });
        true
    }

    fn begin_run(&mut self, y: f32, vy: f32) {
        self.player = PlayerBody::new(self.config.player_x(), y, vy);
        self.run = RunState::new(self.run.id.wrapping_add(1));
        self.track.reset();
        self.track.start(self.speed_factor());
        self.phase = GamePhase::Running;
    }

    /// Single tap: start, jump, or restart depending on phase
    pub fn on_tap(&mut self) {
        match self.phase {
            GamePhase::Idle => {
                self.start();
            }
            GamePhase::Running => {
                self.player.apply_impulse(self.config.jump_force);
                self.events.push(GameEvent::Jumped);
            }
            GamePhase::Terminated => {
                self.restart();
            }
        }
    }

    /// Frame tick with `dt` in milliseconds
    pub fn on_frame_millis(&mut self, dt_ms: f32) {
        self.on_frame(dt_ms / 1000.0);
    }

    /// Frame tick with `dt` in seconds
    pub fn on_frame(&mut self, dt: f32) {
        if self.phase != GamePhase::Running {
            return;
        }
        let Some(dt) = sanitize_dt(dt) else {
            log::trace!("skipping frame with dt {}", dt);
            return;
        };
        self.run.frames += 1;

        self.player.advance(dt, self.config.gravity);
        let sweep = self.track.advance(dt);

        let rocks = self.track.rects();
        if let Some(cause) = collision::detect(&self.player, &rocks, &self.config) {
            self.finish(Some(cause));
            return;
        }

        let (prev_x, x) = (self.track.prev_x, self.track.x);
        if self.scoring.observe(prev_x, x, &mut self.run) {
            log::debug!("Scored: {}", self.run.score());
            self.events.push(GameEvent::Scored {
                score: self.run.score(),
            });
        }

        if self.recycle.fell_through(prev_x, x) {
            self.recycle_rocks();
        } else if sweep == Some(SweepStatus::Completed) {
            self.track.start(self.speed_factor());
        }
    }

    /// New gap offset, then a fresh sweep at the current speed
    fn recycle_rocks(&mut self) {
        let sample: f32 = self.rng.random();
        let offset = recycle_offset(sample, self.config.offset_range);
        self.track.set_offset(offset);
        self.track.cancel();
        self.track.start(self.speed_factor());
        log::debug!("Rocks recycled: offset {:.1}, speed {:.2}", offset, self.speed_factor());
        self.events.push(GameEvent::ObstacleRecycled { offset });
    }

    /// End the current run. Only the first call per run has any effect.
    pub fn terminate(&mut self) {
        self.finish(None);
    }

    fn finish(&mut self, cause: Option<CollisionKind>) {
        if self.phase != GamePhase::Running || !self.run.terminate() {
            return;
        }
        self.phase = GamePhase::Terminated;
        self.track.cancel();

        let score = self.run.score();
        log::info!("Run {} over after {} frames: score {} ({:?})", self.run.id, self.run.frames, score, cause);
        self.events.push(GameEvent::GameOver { score, cause });
        if let Some(callback) = self.on_game_over.as_mut() {
            callback(score);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
