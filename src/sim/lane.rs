//! Lane geometry
//!
//! The playfield is split into equal-width vertical lanes; the player and
//! every enemy sit on a lane centerline.

use crate::consts::LANE_COUNT;

/// X coordinate of a lane's centerline for a playfield of the given width.
///
/// `index` must already be in range, see [`clamp_lane`].
#[inline]
pub fn lane_center_x(width: f32, index: usize) -> f32 {
    debug_assert!(index < LANE_COUNT, "lane index {index} out of range");
    let lane_width = width / LANE_COUNT as f32;
    lane_width * (index as f32 + 0.5)
}

/// Clamp an arbitrary (possibly negative) lane request into `0..LANE_COUNT`
#[inline]
pub fn clamp_lane(index: i64) -> usize {
    index.clamp(0, LANE_COUNT as i64 - 1) as usize
}

/// Move one or more lanes from `current`, stopping at the edges (no wraparound)
#[inline]
pub fn step_lane(current: usize, delta: i32) -> usize {
    clamp_lane(current as i64 + delta as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYFIELD_WIDTH;
    use proptest::prelude::*;

    #[test]
    fn test_lane_centers() {
        let xs: Vec<f32> = (0..LANE_COUNT)
            .map(|i| lane_center_x(PLAYFIELD_WIDTH, i))
            .collect();
        assert_eq!(xs, vec![50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn test_lane_centers_scale_with_width() {
        assert_eq!(lane_center_x(800.0, 0), 100.0);
        assert_eq!(lane_center_x(800.0, 3), 700.0);
    }

    #[test]
    fn test_step_lane_stops_at_edges() {
        assert_eq!(step_lane(0, -1), 0);
        assert_eq!(step_lane(3, 1), 3);
        assert_eq!(step_lane(1, 1), 2);
        assert_eq!(clamp_lane(-42), 0);
        assert_eq!(clamp_lane(99), 3);
    }

    proptest! {
        #[test]
        fn prop_lane_stays_in_range(steps in prop::collection::vec(-3i32..=3, 0..64)) {
            let mut lane = crate::consts::START_LANE;
            for step in steps {
                lane = step_lane(lane, step);
                prop_assert!(lane < LANE_COUNT);
            }
        }
    }
}
