//! Canvas2D painter for draw lists (web only)

use web_sys::CanvasRenderingContext2d;

use super::shapes::{Shape, css_color};

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Paint shapes in order. Drawing failures are ignored; a bad frame is
    /// simply overwritten by the next one.
    pub fn paint(&self, shapes: &[Shape]) {
        let ctx = &self.ctx;
        for shape in shapes {
            match shape {
                Shape::Rect { min, size, color } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.begin_path();
                    ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    )
                    .ok();
                    ctx.fill();
                }
                Shape::Triangle { points, color } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.begin_path();
                    ctx.move_to(points[0].x as f64, points[0].y as f64);
                    ctx.line_to(points[1].x as f64, points[1].y as f64);
                    ctx.line_to(points[2].x as f64, points[2].y as f64);
                    ctx.close_path();
                    ctx.fill();
                }
                Shape::Text {
                    center,
                    text,
                    px,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.set_font(&format!("bold {}px sans-serif", px));
                    ctx.set_text_align("center");
                    ctx.set_text_baseline("middle");
                    ctx.fill_text(text, center.x as f64, center.y as f64).ok();
                }
            }
        }
    }
}
