//! Lane Shooter - A four-lane arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, difficulty, input, spawning, collisions)
//! - `game`: Frame-driven session driver with scoped input/frame cleanup
//! - `platform`: Device classification and frame scheduling seams
//! - `renderer`: Snapshot to draw-list conversion (Canvas2D on web)
//! - `settings`: Persisted player preferences

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{EventSink, Game};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Number of lanes the player and enemies are confined to
    pub const LANE_COUNT: usize = 4;
    /// Lane the player starts each session in
    pub const START_LANE: usize = 1;

    /// Player ship sits this far above the bottom edge
    pub const PLAYER_Y_OFFSET: f32 = 50.0;
    /// Collision radius added to the enemy radius for player hits
    pub const PLAYER_RADIUS: f32 = 15.0;

    /// Projectiles spawn this far above the player
    pub const PROJECTILE_SPAWN_OFFSET: f32 = 20.0;
    /// Projectile distance per tick at level 1
    pub const PROJECTILE_BASE_SPEED: f32 = 7.0;

    /// Fire cooldown at level 1 (ms)
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;
    /// Minimum gap between lane changes (ms), shared with the fire clock
    pub const ACTION_DEBOUNCE_MS: f64 = 100.0;
    /// Enemy spawn interval at level 1 (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 500.0;

    /// Horizontal drag (pixels) that counts as one lane swipe
    pub const TOUCH_DRAG_THRESHOLD: f32 = 30.0;

    /// Enemy radius range [min, max)
    pub const ENEMY_MIN_SIZE: f32 = 15.0;
    pub const ENEMY_MAX_SIZE: f32 = 25.0;
    /// Enemy base speed range [min, max), distance per tick
    pub const ENEMY_MIN_SPEED: f32 = 1.0;
    pub const ENEMY_MAX_SPEED: f32 = 3.0;

    /// Score needed per difficulty level
    pub const POINTS_PER_LEVEL: u32 = 10;

    /// Speeds are distance per tick, calibrated for a 60 Hz display
    pub const NOMINAL_FRAME_MS: f64 = 1000.0 / 60.0;

    /// Viewports at or below this width use touch controls
    pub const TOUCH_VIEWPORT_MAX_WIDTH: f64 = 768.0;
}
