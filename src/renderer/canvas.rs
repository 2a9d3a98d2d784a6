//! Browser canvas backend
//!
//! Implements the drawing capability over `CanvasRenderingContext2d`. All
//! fallible context calls are fire-and-forget: a failed primitive costs one
//! shape in one frame, never the run.

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::surface::{PathCmd, Surface};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    fn trace(&self, path: &[PathCmd]) {
        self.ctx.begin_path();
        for cmd in path {
            match *cmd {
                PathCmd::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathCmd::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathCmd::QuadTo { ctrl, to } => self.ctx.quadratic_curve_to(
                    ctrl.x as f64,
                    ctrl.y as f64,
                    to.x as f64,
                    to.y as f64,
                ),
                PathCmd::Close => self.ctx.close_path(),
            }
        }
    }

    fn trace_round_rect(&self, pos: Vec2, size: Vec2, radius: f32) {
        let (x, y) = (pos.x as f64, pos.y as f64);
        let (w, h) = (size.x as f64, size.y as f64);
        let r = (radius as f64).min(w / 2.0).min(h / 2.0);

        self.ctx.begin_path();
        self.ctx.move_to(x + r, y);
        self.ctx.line_to(x + w - r, y);
        self.ctx.quadratic_curve_to(x + w, y, x + w, y + r);
        self.ctx.line_to(x + w, y + h - r);
        self.ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
        self.ctx.line_to(x + r, y + h);
        self.ctx.quadratic_curve_to(x, y + h, x, y + h - r);
        self.ctx.line_to(x, y + r);
        self.ctx.quadratic_curve_to(x, y, x + r, y);
        self.ctx.close_path();
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx
            .clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: &str, line_width: f32) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx
            .stroke_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: &str) {
        self.trace_round_rect(pos, size, radius);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: &str, line_width: f32) {
        self.trace_round_rect(pos, size, radius);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, tilt: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.ellipse(
            center.x as f64,
            center.y as f64,
            radii.x as f64,
            radii.y as f64,
            tilt as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, path: &[PathCmd], color: &str) {
        self.trace(path);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke_path(&mut self, path: &[PathCmd], color: &str, line_width: f32) {
        self.trace(path);
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
        // Re-assert alignment every call: resizing the canvas resets the
        // context state behind our back
        self.ctx.set_text_align("center");
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
    }

    fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: &str, bottom: &str) {
        let gradient = self.ctx.create_linear_gradient(
            pos.x as f64,
            pos.y as f64,
            pos.x as f64,
            (pos.y + size.y) as f64,
        );
        let _ = gradient.add_color_stop(0.0, top);
        let _ = gradient.add_color_stop(1.0, bottom);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_radial_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: &str) {
        let (cx, cy) = (center.x as f64, center.y as f64);
        let Ok(gradient) = self
            .ctx
            .create_radial_gradient(cx, cy, inner as f64, cx, cy, outer as f64)
        else {
            return;
        };
        let _ = gradient.add_color_stop(0.0, color);
        let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(
            cx - outer as f64,
            cy - outer as f64,
            outer as f64 * 2.0,
            outer as f64 * 2.0,
        );
    }

    fn push(&mut self) {
        self.ctx.save();
    }

    fn pop(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, by: Vec2) {
        let _ = self.ctx.translate(by.x as f64, by.y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        let _ = self.ctx.rotate(radians as f64);
    }

    fn scale(&mut self, factor: Vec2) {
        let _ = self.ctx.scale(factor.x as f64, factor.y as f64);
    }

    fn clip_rect(&mut self, pos: Vec2, size: Vec2) {
        self.ctx.begin_path();
        self.ctx
            .rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
        self.ctx.clip();
    }
}
