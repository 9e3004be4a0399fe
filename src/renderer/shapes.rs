//! 2D primitives produced by the presentation adapter

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear RGBA color
pub type Color = [f32; 4];

/// One drawable primitive in playfield coordinates (origin top-left, y down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned filled rectangle
    Rect { min: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Color },
    /// Filled triangle
    Triangle { points: [Vec2; 3], color: Color },
    /// Centered text
    Text { center: Vec2, text: String, px: f32, color: Color },
}

/// Rectangle centered on `center`
pub fn centered_rect(center: Vec2, size: Vec2, color: Color) -> Shape {
    Shape::Rect {
        min: center - size / 2.0,
        size,
        color,
    }
}

/// Upward-pointing ship triangle with the given half-width and height
pub fn ship(center: Vec2, half_width: f32, height: f32, color: Color) -> Shape {
    let top = center - Vec2::new(0.0, height / 2.0);
    let base_y = center.y + height / 2.0;
    Shape::Triangle {
        points: [
            top,
            Vec2::new(center.x - half_width, base_y),
            Vec2::new(center.x + half_width, base_y),
        ],
        color,
    }
}

/// CSS `rgba()` string for canvas fill styles
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0)
    )
}
