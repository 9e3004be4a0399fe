//! Session state and core simulation types
//!
//! Everything a tick reads or writes lives in [`Session`]; there are no globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::{Difficulty, level_for};
use super::input::{ControlScheme, InputState, LogicalKey};
use super::lane::{clamp_lane, lane_center_x};
use super::spawner::Spawner;
use crate::consts::*;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting for `start()`
    #[default]
    Idle,
    /// Ticking
    Active,
    /// Player was hit; frozen until `start()`
    GameOver,
}

/// A player shot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self { id, pos }
    }
}

/// A falling enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub lane: usize,
    pub pos: Vec2,
    /// Collision radius
    pub size: f32,
    /// Distance per tick, already scaled by difficulty at spawn
    pub speed: f32,
}

impl Enemy {
    /// New enemy at the top edge (y = 0)
    pub fn new(id: u32, lane: usize, x: f32, size: f32, speed: f32) -> Self {
        Self {
            id,
            lane,
            pos: Vec2::new(x, 0.0),
            size,
            speed,
        }
    }
}

/// Notifications for audio/VFX listeners; fire-and-forget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Fired { projectile_id: u32 },
    EnemyDestroyed { enemy_id: u32, score: u32 },
    PlayerHit { enemy_id: u32 },
}

/// One game instance
#[derive(Debug, Clone)]
pub struct Session {
    /// Seed the RNG was created from (for replay)
    pub seed: u64,
    pub status: SessionStatus,
    pub score: u32,
    /// Multipliers in effect for the current tick
    pub difficulty: Difficulty,
    /// Always in `0..LANE_COUNT`
    pub lane: usize,
    /// Insertion order = fire order
    pub projectiles: Vec<Projectile>,
    /// Insertion order = spawn order
    pub enemies: Vec<Enemy>,
    pub input: InputState,
    pub spawner: Spawner,
    /// Ticks processed since the last `start()`
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    /// Events raised since the last drain
    pub(crate) events: Vec<GameEvent>,
    pub(crate) next_id: u32,
}

impl Session {
    /// Create an idle session with the given control scheme and seed
    pub fn new(scheme: ControlScheme, seed: u64) -> Self {
        Self {
            seed,
            status: SessionStatus::Idle,
            score: 0,
            difficulty: Difficulty::default(),
            lane: START_LANE,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            input: InputState::new(scheme),
            spawner: Spawner::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Enter Active from any state, wiping the previous run. The RNG keeps
    /// its stream so consecutive runs differ.
    pub fn start(&mut self) {
        self.status = SessionStatus::Active;
        self.clear_run();
        log::info!(
            "Session started (seed {}, {} controls)",
            self.seed,
            self.input.scheme().as_str()
        );
    }

    /// Return to Idle (navigating away, explicit stop)
    pub fn stop(&mut self) {
        self.status = SessionStatus::Idle;
        self.clear_run();
    }

    fn clear_run(&mut self) {
        self.score = 0;
        self.difficulty = Difficulty::default();
        self.lane = START_LANE;
        self.projectiles.clear();
        self.enemies.clear();
        self.input.reset();
        self.spawner.reset();
        self.time_ticks = 0;
        self.events.clear();
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// Difficulty level implied by the current score
    pub fn difficulty_level(&self) -> u32 {
        level_for(self.score)
    }

    /// Player ship center (only meaningful while Active)
    pub fn player_pos(&self) -> Vec2 {
        Vec2::new(
            lane_center_x(PLAYFIELD_WIDTH, self.lane),
            PLAYFIELD_HEIGHT - PLAYER_Y_OFFSET,
        )
    }

    /// Put the player in a lane; out-of-range requests are clamped
    pub fn set_lane(&mut self, lane: i64) {
        self.lane = clamp_lane(lane);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Input forwarding (gated on the session being live) ===

    pub fn key_down(&mut self, key: LogicalKey) {
        if self.is_active() {
            self.input.key_down(key);
        }
    }

    pub fn key_up(&mut self, key: LogicalKey) {
        if self.is_active() {
            self.input.key_up(key);
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        if self.is_active() {
            self.input.touch_start(x);
        }
    }

    pub fn touch_move(&mut self, x: f32) {
        if self.is_active() {
            self.input.touch_move(x, self.lane);
        }
    }

    /// Lifting a finger is always accepted so a gesture never sticks
    pub fn touch_end(&mut self) {
        self.input.touch_end();
    }
}
