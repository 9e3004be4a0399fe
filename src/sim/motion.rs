//! Uniform-velocity motion and out-of-bounds pruning

use super::state::{Enemy, Projectile};

/// Move projectiles up by `speed` and drop the ones above the playfield
pub fn advance_projectiles(projectiles: &mut Vec<Projectile>, speed: f32) {
    for projectile in projectiles.iter_mut() {
        projectile.pos.y -= speed;
    }
    projectiles.retain(|p| p.pos.y >= 0.0);
}

/// Move enemies down by their own speed and drop the ones past `height`
pub fn advance_enemies(enemies: &mut Vec<Enemy>, height: f32) {
    for enemy in enemies.iter_mut() {
        enemy.pos.y += enemy.speed;
    }
    enemies.retain(|e| e.pos.y < height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYFIELD_HEIGHT;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_projectile_removed_below_zero() {
        let mut projectiles = vec![
            Projectile::new(1, Vec2::new(50.0, 7.0)),
            Projectile::new(2, Vec2::new(50.0, 6.0)),
        ];
        advance_projectiles(&mut projectiles, 7.0);
        assert_eq!(projectiles.len(), 1);
        assert_eq!(projectiles[0].id, 1);
        assert_eq!(projectiles[0].pos.y, 0.0);
    }

    #[test]
    fn test_enemy_removed_at_height() {
        let mut enemies = vec![
            Enemy::new(1, 0, 50.0, 20.0, 2.0),
            Enemy::new(2, 1, 150.0, 20.0, 2.0),
        ];
        enemies[0].pos.y = 397.0;
        enemies[1].pos.y = 398.0;
        advance_enemies(&mut enemies, PLAYFIELD_HEIGHT);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].id, 1);
        assert_eq!(enemies[0].pos.y, 399.0);
    }

    proptest! {
        #[test]
        fn prop_projectile_strictly_rises_until_removed(
            start in 0.0f32..400.0,
            speed in 1.0f32..20.0,
        ) {
            let mut projectiles = vec![Projectile::new(1, Vec2::new(150.0, start))];
            let mut last_y = start;
            while let Some(p) = projectiles.first().copied() {
                prop_assert!(p.pos.y >= 0.0);
                advance_projectiles(&mut projectiles, speed);
                match projectiles.first() {
                    Some(next) => {
                        prop_assert!(next.pos.y < last_y);
                        last_y = next.pos.y;
                    }
                    None => prop_assert!(last_y - speed < 0.0),
                }
            }
        }

        #[test]
        fn prop_enemy_strictly_falls_until_removed(speed in 0.5f32..8.0) {
            let mut enemies = vec![Enemy::new(1, 2, 250.0, 20.0, speed)];
            let mut last_y = 0.0;
            while !enemies.is_empty() {
                advance_enemies(&mut enemies, PLAYFIELD_HEIGHT);
                match enemies.first() {
                    Some(next) => {
                        prop_assert!(next.pos.y > last_y);
                        prop_assert!(next.pos.y < PLAYFIELD_HEIGHT);
                        last_y = next.pos.y;
                    }
                    None => prop_assert!(last_y + speed >= PLAYFIELD_HEIGHT),
                }
            }
        }
    }
}
