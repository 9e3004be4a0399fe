//! Presentation adapter
//!
//! Turns a [`Snapshot`] into a flat list of [`Shape`]s. Pure and read-only;
//! the web build paints the list onto a 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use shapes::{Color, Shape, css_color};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{LANE_COUNT, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::sim::{SessionStatus, Snapshot};

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const LANE_DIVIDER: Color = [0.22, 0.25, 0.32, 0.3];
    pub const STAR: Color = [1.0, 1.0, 1.0, 1.0];
    pub const PLAYER: Color = [0.23, 0.51, 0.96, 1.0];
    pub const PROJECTILE: Color = [0.98, 0.8, 0.08, 1.0];
    pub const ENEMY: Color = [0.86, 0.15, 0.47, 1.0];
    pub const BANNER_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// Number of background stars
pub const STAR_COUNT: usize = 50;

/// Projectile capsule size (w, h)
const PROJECTILE_SIZE: Vec2 = Vec2::new(2.0, 6.0);

/// Decorative background stars, fixed for the lifetime of a renderer
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<(Vec2, f32, f32)>,
}

impl Starfield {
    /// Separate RNG from the simulation so decoration never shifts gameplay
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| {
                let pos = Vec2::new(
                    rng.random_range(0.0..PLAYFIELD_WIDTH),
                    rng.random_range(0.0..PLAYFIELD_HEIGHT),
                );
                let radius = rng.random_range(0.5..1.5);
                let alpha = rng.random_range(0.3..1.0);
                (pos, radius, alpha)
            })
            .collect();
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    fn shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.stars.iter().map(|&(center, radius, alpha)| {
            let [r, g, b, _] = colors::STAR;
            Shape::Circle {
                center,
                radius,
                color: [r, g, b, alpha],
            }
        })
    }
}

/// Build the draw list for one frame, back to front
pub fn draw_list(snapshot: &Snapshot, stars: &Starfield) -> Vec<Shape> {
    let mut list = Vec::with_capacity(
        1 + LANE_COUNT + stars.len() + snapshot.projectiles.len() + snapshot.enemies.len() + 2,
    );

    list.push(Shape::Rect {
        min: Vec2::ZERO,
        size: Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT),
        color: colors::BACKGROUND,
    });

    let lane_width = PLAYFIELD_WIDTH / LANE_COUNT as f32;
    for i in 1..LANE_COUNT {
        list.push(Shape::Rect {
            min: Vec2::new(lane_width * i as f32, 0.0),
            size: Vec2::new(1.0, PLAYFIELD_HEIGHT),
            color: colors::LANE_DIVIDER,
        });
    }

    list.extend(stars.shapes());

    if snapshot.status == SessionStatus::Active {
        let player = Vec2::new(snapshot.player_x, snapshot.player_y);
        list.push(shapes::ship(player, 8.0, 16.0, colors::PLAYER));
    }

    for p in &snapshot.projectiles {
        list.push(shapes::centered_rect(
            Vec2::new(p.x, p.y),
            PROJECTILE_SIZE,
            colors::PROJECTILE,
        ));
    }

    // Enemies are drawn with diameter = size (the collision radius is larger)
    for e in &snapshot.enemies {
        list.push(Shape::Circle {
            center: Vec2::new(e.x, e.y),
            radius: e.size / 2.0,
            color: colors::ENEMY,
        });
    }

    if snapshot.status == SessionStatus::GameOver {
        list.push(Shape::Text {
            center: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            text: "Game Over".to_string(),
            px: 24.0,
            color: colors::BANNER_TEXT,
        });
    }

    list
}
