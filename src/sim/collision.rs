//! Circle-proximity collision checks
//!
//! Both checks are read-only scans; the tick applies their results.

use glam::Vec2;

use super::state::{Enemy, Projectile};
use crate::consts::PLAYER_RADIUS;

/// A projectile/enemy pair close enough to destroy each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub enemy_index: usize,
    pub projectile_index: usize,
}

/// Find the single projectile/enemy pair to resolve this tick.
///
/// Enemies are scanned newest-first and, for each, projectiles newest-first;
/// the first pair whose centers are closer than the enemy radius wins and the
/// scan stops. Any other overlapping pairs wait for a later tick.
pub fn find_projectile_hit(enemies: &[Enemy], projectiles: &[Projectile]) -> Option<ProjectileHit> {
    for (enemy_index, enemy) in enemies.iter().enumerate().rev() {
        for (projectile_index, projectile) in projectiles.iter().enumerate().rev() {
            if enemy.pos.distance(projectile.pos) < enemy.size {
                return Some(ProjectileHit {
                    enemy_index,
                    projectile_index,
                });
            }
        }
    }
    None
}

/// First enemy (in spawn order) touching the player ship
pub fn find_player_hit(enemies: &[Enemy], player: Vec2) -> Option<&Enemy> {
    enemies
        .iter()
        .find(|enemy| enemy.pos.distance(player) < enemy.size + PLAYER_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(id: u32, x: f32, y: f32, size: f32) -> Enemy {
        let mut enemy = Enemy::new(id, 0, x, size, 1.0);
        enemy.pos.y = y;
        enemy
    }

    #[test]
    fn test_no_hit_outside_radius() {
        let enemies = [enemy_at(1, 50.0, 100.0, 20.0)];
        let projectiles = [Projectile::new(2, Vec2::new(50.0, 120.0))];
        assert_eq!(find_projectile_hit(&enemies, &projectiles), None);

        let projectiles = [Projectile::new(2, Vec2::new(50.0, 119.9))];
        assert!(find_projectile_hit(&enemies, &projectiles).is_some());
    }

    #[test]
    fn test_newest_enemy_and_projectile_win() {
        let enemies = [
            enemy_at(1, 50.0, 100.0, 20.0),
            enemy_at(2, 50.0, 105.0, 20.0),
        ];
        let projectiles = [
            Projectile::new(3, Vec2::new(50.0, 104.0)),
            Projectile::new(4, Vec2::new(50.0, 108.0)),
        ];
        let hit = find_projectile_hit(&enemies, &projectiles).expect("hit");
        assert_eq!(hit.enemy_index, 1);
        assert_eq!(hit.projectile_index, 1);
    }

    #[test]
    fn test_newest_enemy_checked_before_older_projectiles_match() {
        // Newer enemy only overlaps the older projectile
        let enemies = [
            enemy_at(1, 150.0, 100.0, 20.0),
            enemy_at(2, 50.0, 100.0, 20.0),
        ];
        let projectiles = [
            Projectile::new(3, Vec2::new(50.0, 100.0)),
            Projectile::new(4, Vec2::new(150.0, 100.0)),
        ];
        let hit = find_projectile_hit(&enemies, &projectiles).expect("hit");
        assert_eq!(hit.enemy_index, 1);
        assert_eq!(hit.projectile_index, 0);
    }

    #[test]
    fn test_player_hit_radius() {
        let player = Vec2::new(150.0, 350.0);
        // size 20 + player 15 = 35
        let enemies = [enemy_at(1, 150.0, 315.0, 20.0)];
        assert!(find_player_hit(&enemies, player).is_none());

        let enemies = [enemy_at(1, 150.0, 315.5, 20.0)];
        assert_eq!(find_player_hit(&enemies, player).map(|e| e.id), Some(1));
    }

    #[test]
    fn test_other_lane_never_hits_player() {
        let player = Vec2::new(150.0, 350.0);
        let enemies = [enemy_at(1, 50.0, 350.0, 24.9)];
        assert!(find_player_hit(&enemies, player).is_none());
    }
}
