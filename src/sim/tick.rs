//! Per-frame simulation tick
//!
//! Advances the session by exactly one step. Speeds are distance per tick, so
//! the pace of the game follows the caller's frame rate.

use glam::Vec2;

use super::collision::{find_player_hit, find_projectile_hit};
use super::difficulty::Difficulty;
use super::lane::step_lane;
use super::motion::{advance_enemies, advance_projectiles};
use super::state::{GameEvent, Projectile, Session, SessionStatus};
use crate::consts::*;

/// What a tick did, for the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session was not Active; nothing changed
    Skipped,
    /// Session is still running; schedule the next frame
    Running,
    /// The player was hit this tick
    GameOver,
}

/// Advance an Active session by one tick at the scheduler timestamp (ms)
pub fn tick(session: &mut Session, timestamp: f64) -> TickOutcome {
    if session.status != SessionStatus::Active {
        return TickOutcome::Skipped;
    }
    session.time_ticks += 1;

    // Difficulty
    session.difficulty = Difficulty::for_score(session.score);
    let difficulty = session.difficulty;

    // Input
    let intents = session.input.poll(timestamp, &difficulty);
    if intents.lane_step != 0 {
        session.lane = step_lane(session.lane, intents.lane_step);
    }
    if intents.fire {
        let id = session.next_entity_id();
        let pos = session.player_pos() - Vec2::new(0.0, PROJECTILE_SPAWN_OFFSET);
        session.projectiles.push(Projectile::new(id, pos));
        session.events.push(GameEvent::Fired { projectile_id: id });
    }

    // Projectiles
    advance_projectiles(
        &mut session.projectiles,
        PROJECTILE_BASE_SPEED * difficulty.projectile_speed,
    );

    // Spawning
    let next_id = &mut session.next_id;
    let spawned = session
        .spawner
        .update(timestamp, &difficulty, &mut session.rng, || {
            let id = *next_id;
            *next_id += 1;
            id
        });
    if let Some(enemy) = spawned {
        session.enemies.push(enemy);
    }

    // Enemies
    advance_enemies(&mut session.enemies, PLAYFIELD_HEIGHT);

    // Collisions. The player check sees every enemy that survived motion,
    // including one a projectile destroys in this same tick.
    let player_hit = find_player_hit(&session.enemies, session.player_pos()).map(|e| e.id);

    if let Some(hit) = find_projectile_hit(&session.enemies, &session.projectiles) {
        let enemy = session.enemies.remove(hit.enemy_index);
        session.projectiles.remove(hit.projectile_index);
        session.score += 1;
        session.events.push(GameEvent::EnemyDestroyed {
            enemy_id: enemy.id,
            score: session.score,
        });
        log::debug!("Enemy {} destroyed, score {}", enemy.id, session.score);
    }

    if let Some(enemy_id) = player_hit {
        session.status = SessionStatus::GameOver;
        session.events.push(GameEvent::PlayerHit { enemy_id });
        log::info!(
            "Game over: hit by enemy {} after {} ticks, score {}",
            enemy_id,
            session.time_ticks,
            session.score
        );
        return TickOutcome::GameOver;
    }

    TickOutcome::Running
}
