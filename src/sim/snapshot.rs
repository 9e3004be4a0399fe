//! Read-only view of a session for presentation layers

use serde::{Deserialize, Serialize};

use super::state::{Session, SessionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: SessionStatus,
    pub score: u32,
    pub difficulty_level: u32,
    pub lane: usize,
    pub player_x: f32,
    pub player_y: f32,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
}

impl Snapshot {
    pub fn capture(session: &Session) -> Self {
        let player = session.player_pos();
        Self {
            status: session.status,
            score: session.score,
            difficulty_level: session.difficulty_level(),
            lane: session.lane,
            player_x: player.x,
            player_y: player.y,
            projectiles: session
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    id: p.id,
                    x: p.pos.x,
                    y: p.pos.y,
                })
                .collect(),
            enemies: session
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    x: e.pos.x,
                    y: e.pos.y,
                    size: e.size,
                })
                .collect(),
        }
    }
}
