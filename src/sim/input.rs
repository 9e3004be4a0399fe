//! Unified player input
//!
//! Keyboard and touch both reduce to the same two per-tick intents: a lane
//! step and a fire request. Events are recorded as they arrive and only
//! consumed by [`InputState::poll`] at the start of the next tick.
//!
//! Both schemes share one `last_action` clock. On keyboard a lane change
//! stamps it too, so moving also restarts the fire cooldown.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::lane::step_lane;
use crate::consts::{ACTION_DEBOUNCE_MS, FIRE_COOLDOWN_MS, LANE_COUNT, TOUCH_DRAG_THRESHOLD};

/// Which input modality drives the session (picked once at startup)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ControlScheme {
    /// Held keys: lane-left, lane-right, fire
    #[default]
    Keyboard,
    /// Drag to change lanes, hold to auto-fire
    Touch,
}

impl ControlScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlScheme::Keyboard => "Keyboard",
            ControlScheme::Touch => "Touch",
        }
    }
}

/// Logical keys; the platform layer maps physical keys onto these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalKey {
    LaneLeft,
    LaneRight,
    Fire,
}

/// What the player asked for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intents {
    /// Signed lane change (negative = left)
    pub lane_step: i32,
    /// Spawn a projectile this tick
    pub fire: bool,
}

#[derive(Debug, Clone, Default)]
struct HeldKeys {
    lane_left: bool,
    lane_right: bool,
    fire: bool,
}

#[derive(Debug, Clone, Default)]
struct TouchGesture {
    touching: bool,
    /// X where the current drag segment started
    origin_x: f32,
    /// Lane steps recognised since the last poll
    pending_steps: i32,
}

#[derive(Debug, Clone)]
enum Mode {
    Keyboard(HeldKeys),
    Touch(TouchGesture),
}

/// Input state for one session
#[derive(Debug, Clone)]
pub struct InputState {
    mode: Mode,
    /// Timestamp (ms) of the last lane change or shot
    last_action: f64,
}

impl InputState {
    pub fn new(scheme: ControlScheme) -> Self {
        let mode = match scheme {
            ControlScheme::Keyboard => Mode::Keyboard(HeldKeys::default()),
            ControlScheme::Touch => Mode::Touch(TouchGesture::default()),
        };
        Self {
            mode,
            last_action: 0.0,
        }
    }

    pub fn scheme(&self) -> ControlScheme {
        match self.mode {
            Mode::Keyboard(_) => ControlScheme::Keyboard,
            Mode::Touch(_) => ControlScheme::Touch,
        }
    }

    /// Forget held keys, gestures and the action clock
    pub fn reset(&mut self) {
        *self = Self::new(self.scheme());
    }

    pub fn last_action(&self) -> f64 {
        self.last_action
    }

    pub fn key_down(&mut self, key: LogicalKey) {
        self.set_key(key, true);
    }

    pub fn key_up(&mut self, key: LogicalKey) {
        self.set_key(key, false);
    }

    fn set_key(&mut self, key: LogicalKey, held: bool) {
        // Key events in touch mode have no listener to arrive through
        let Mode::Keyboard(keys) = &mut self.mode else {
            return;
        };
        match key {
            LogicalKey::LaneLeft => keys.lane_left = held,
            LogicalKey::LaneRight => keys.lane_right = held,
            LogicalKey::Fire => keys.fire = held,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        if let Mode::Touch(gesture) = &mut self.mode {
            gesture.origin_x = x;
            gesture.touching = true;
        }
    }

    /// Track a drag. `current_lane` is the lane the player occupies right
    /// now; a swipe that would push past an edge is ignored and the drag
    /// origin stays put.
    pub fn touch_move(&mut self, x: f32, current_lane: usize) {
        let Mode::Touch(gesture) = &mut self.mode else {
            return;
        };
        if !gesture.touching {
            return;
        }

        let delta = x - gesture.origin_x;
        if delta.abs() <= TOUCH_DRAG_THRESHOLD {
            return;
        }

        let lane = step_lane(current_lane, gesture.pending_steps);
        if delta < 0.0 && lane > 0 {
            gesture.pending_steps -= 1;
            gesture.origin_x = x;
        } else if delta > 0.0 && lane < LANE_COUNT - 1 {
            gesture.pending_steps += 1;
            gesture.origin_x = x;
        }
    }

    pub fn touch_end(&mut self) {
        if let Mode::Touch(gesture) = &mut self.mode {
            gesture.touching = false;
        }
    }

    pub fn is_touching(&self) -> bool {
        matches!(&self.mode, Mode::Touch(g) if g.touching)
    }

    /// Consume recorded input into this tick's intents
    pub fn poll(&mut self, timestamp: f64, difficulty: &Difficulty) -> Intents {
        let cooldown = FIRE_COOLDOWN_MS * difficulty.fire_cooldown;
        let mut intents = Intents::default();

        match &mut self.mode {
            Mode::Keyboard(keys) => {
                if keys.lane_left && timestamp - self.last_action > ACTION_DEBOUNCE_MS {
                    intents.lane_step -= 1;
                    self.last_action = timestamp;
                }
                if keys.lane_right && timestamp - self.last_action > ACTION_DEBOUNCE_MS {
                    intents.lane_step += 1;
                    self.last_action = timestamp;
                }
                if keys.fire && timestamp - self.last_action > cooldown {
                    intents.fire = true;
                    self.last_action = timestamp;
                }
            }
            Mode::Touch(gesture) => {
                intents.lane_step = std::mem::take(&mut gesture.pending_steps);
                if gesture.touching && timestamp - self.last_action > cooldown {
                    intents.fire = true;
                    self.last_action = timestamp;
                }
            }
        }

        intents
    }
}
