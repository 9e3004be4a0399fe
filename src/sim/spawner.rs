//! Enemy spawning
//!
//! Time-gated: one enemy per elapsed (difficulty-scaled) interval, with lane,
//! size and speed drawn from the session RNG.

use rand::Rng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use super::lane::lane_center_x;
use super::state::Enemy;
use crate::consts::*;

/// Spawn clock for one session
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Timestamp (ms) of the last actual spawn
    last_spawn: f64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.last_spawn = 0.0;
    }

    pub fn last_spawn(&self) -> f64 {
        self.last_spawn
    }

    /// Interval (ms) between spawns at the given difficulty
    pub fn interval(difficulty: &Difficulty) -> f64 {
        SPAWN_INTERVAL_MS * difficulty.spawn_interval
    }

    /// Spawn an enemy if the interval has elapsed. The clock only moves
    /// when something is actually spawned.
    pub fn update(
        &mut self,
        timestamp: f64,
        difficulty: &Difficulty,
        rng: &mut Pcg32,
        id: impl FnOnce() -> u32,
    ) -> Option<Enemy> {
        if timestamp - self.last_spawn <= Self::interval(difficulty) {
            return None;
        }
        self.last_spawn = timestamp;

        let lane = rng.random_range(0..LANE_COUNT);
        let size = rng.random_range(ENEMY_MIN_SIZE..ENEMY_MAX_SIZE);
        let base_speed = rng.random_range(ENEMY_MIN_SPEED..ENEMY_MAX_SPEED);

        let enemy = Enemy::new(
            id(),
            lane,
            lane_center_x(PLAYFIELD_WIDTH, lane),
            size,
            base_speed * difficulty.enemy_speed,
        );
        log::debug!(
            "Spawned enemy {} in lane {} (size {:.1}, speed {:.2})",
            enemy.id,
            lane,
            size,
            enemy.speed
        );
        Some(enemy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_gate() {
        let mut spawner = Spawner::new();
        let mut rng = Pcg32::seed_from_u64(7);
        let d = Difficulty::for_level(1);

        assert!(spawner.update(500.0, &d, &mut rng, || 1).is_none());
        assert_eq!(spawner.last_spawn(), 0.0);

        let enemy = spawner.update(501.0, &d, &mut rng, || 1).expect("spawn");
        assert_eq!(spawner.last_spawn(), 501.0);
        assert_eq!(enemy.id, 1);
        assert_eq!(enemy.pos.y, 0.0);

        assert!(spawner.update(900.0, &d, &mut rng, || 2).is_none());
        assert!(spawner.update(1002.0, &d, &mut rng, || 2).is_some());
    }

    #[test]
    fn test_spawned_attributes_in_range() {
        let mut spawner = Spawner::new();
        let mut rng = Pcg32::seed_from_u64(12345);
        let d = Difficulty::for_level(4);
        let mut t = 0.0;
        let mut seen_lanes = [false; LANE_COUNT];

        for id in 0..200 {
            t += 1000.0;
            let enemy = spawner.update(t, &d, &mut rng, || id).expect("spawn");
            assert!(enemy.lane < LANE_COUNT);
            assert_eq!(enemy.pos.x, lane_center_x(PLAYFIELD_WIDTH, enemy.lane));
            assert!((ENEMY_MIN_SIZE..ENEMY_MAX_SIZE).contains(&enemy.size));
            let min = ENEMY_MIN_SPEED * d.enemy_speed;
            let max = ENEMY_MAX_SPEED * d.enemy_speed;
            assert!(enemy.speed >= min && enemy.speed < max + 1e-4);
            seen_lanes[enemy.lane] = true;
        }
        assert!(seen_lanes.iter().all(|&s| s));
    }

    #[test]
    fn test_interval_shrinks_with_level() {
        assert_eq!(Spawner::interval(&Difficulty::for_level(1)), 500.0);
        assert!((Spawner::interval(&Difficulty::for_level(6)) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_seed_same_enemies() {
        let d = Difficulty::for_level(1);
        let mut a = (Spawner::new(), Pcg32::seed_from_u64(99));
        let mut b = (Spawner::new(), Pcg32::seed_from_u64(99));
        for i in 1..20 {
            let t = i as f64 * 600.0;
            let ea = a.0.update(t, &d, &mut a.1, || i).expect("spawn");
            let eb = b.0.update(t, &d, &mut b.1, || i).expect("spawn");
            assert_eq!(ea.lane, eb.lane);
            assert_eq!(ea.size, eb.size);
            assert_eq!(ea.speed, eb.speed);
        }
    }
}
