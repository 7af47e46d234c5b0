//! Canvas2D drawing surface used by the frame loop.

use app_core::{BG_GRADIENT_END, BG_GRADIENT_START};
use glam::Vec2;
use web_sys as web;

pub struct Surface<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> Surface<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Clear, then lay the faint diagonal gradient wash under the frame.
    pub fn paint_background(&self, width: f32, height: f32) {
        let (w, h) = (width as f64, height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, w, h);
        let _ = gradient.add_color_stop(0.0, BG_GRADIENT_START);
        let _ = gradient.add_color_stop(1.0, BG_GRADIENT_END);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    pub fn fill_circle(&self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    pub fn set_line_width(&self, width: f32) {
        self.ctx.set_line_width(width as f64);
    }

    pub fn stroke_line(&self, a: Vec2, b: Vec2, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.stroke();
    }
}
