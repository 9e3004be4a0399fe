//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per `tick`, timed by scheduler timestamps
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod input;
pub mod lane;
pub mod motion;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{ProjectileHit, find_player_hit, find_projectile_hit};
pub use difficulty::{Difficulty, level_for};
pub use input::{ControlScheme, InputState, Intents, LogicalKey};
pub use lane::{clamp_lane, lane_center_x, step_lane};
pub use snapshot::{EnemyView, ProjectileView, Snapshot};
pub use spawner::Spawner;
pub use state::{Enemy, GameEvent, Projectile, Session, SessionStatus};
pub use tick::{TickOutcome, tick};
