//! Score-driven difficulty curve
//!
//! Everything here is a pure function of score and is recomputed every tick.

use crate::consts::POINTS_PER_LEVEL;

/// Difficulty level for a score: one level per `POINTS_PER_LEVEL` points, starting at 1
#[inline]
pub fn level_for(score: u32) -> u32 {
    score / POINTS_PER_LEVEL + 1
}

/// Speed and rate multipliers for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub level: u32,
    /// Scales projectile distance per tick (+20% per level)
    pub projectile_speed: f32,
    /// Scales enemy speed at spawn time (+30% per level)
    pub enemy_speed: f32,
    /// Scales the spawn interval (shrinks as level rises)
    pub spawn_interval: f64,
    /// Scales the fire cooldown (shrinks as level rises)
    pub fire_cooldown: f64,
}

impl Difficulty {
    pub fn for_level(level: u32) -> Self {
        let steps = level.saturating_sub(1);
        let f = steps as f32;
        let d = steps as f64;
        Self {
            level,
            projectile_speed: 1.0 + 0.2 * f,
            enemy_speed: 1.0 + 0.3 * f,
            spawn_interval: 1.0 / (1.0 + 0.2 * d),
            fire_cooldown: 1.0 / (1.0 + 0.06 * d),
        }
    }

    pub fn for_score(score: u32) -> Self {
        Self::for_level(level_for(score))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::for_level(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(9), 1);
        assert_eq!(level_for(10), 2);
        assert_eq!(level_for(19), 2);
        assert_eq!(level_for(20), 3);
    }

    #[test]
    fn test_level_one_is_neutral() {
        let d = Difficulty::for_score(0);
        assert_eq!(d.projectile_speed, 1.0);
        assert_eq!(d.enemy_speed, 1.0);
        assert_eq!(d.spawn_interval, 1.0);
        assert_eq!(d.fire_cooldown, 1.0);
    }

    #[test]
    fn test_level_three_multipliers() {
        let d = Difficulty::for_score(25);
        assert_eq!(d.level, 3);
        assert!((d.projectile_speed - 1.4).abs() < 1e-6);
        assert!((d.enemy_speed - 1.6).abs() < 1e-6);
        assert!((d.spawn_interval - 1.0 / 1.4).abs() < 1e-12);
        assert!((d.fire_cooldown - 1.0 / 1.12).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_level_formula(score in 0u32..1_000_000) {
            prop_assert_eq!(level_for(score), score / 10 + 1);
        }

        #[test]
        fn prop_level_monotonic(a in 0u32..100_000, b in 0u32..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for(lo) <= level_for(hi));
            let (dl, dh) = (Difficulty::for_score(lo), Difficulty::for_score(hi));
            prop_assert!(dl.enemy_speed <= dh.enemy_speed);
            prop_assert!(dl.spawn_interval >= dh.spawn_interval);
            prop_assert!(dl.fire_cooldown >= dh.fire_cooldown);
        }
    }
}
