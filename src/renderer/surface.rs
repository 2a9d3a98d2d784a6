//! Drawing-primitive capability
//!
//! The scene translator talks to whatever can fill rectangles, ellipses,
//! paths and text; the browser canvas backend implements this over
//! `CanvasRenderingContext2d`, tests implement it with a recorder.

use glam::Vec2;

/// A single command in an outline path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic curve through `ctrl` ending at `to`
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

/// A 2D raster target. Colors are CSS color strings, fonts are CSS font
/// strings; text draws center-aligned on the given point.
///
/// `push`/`pop` bracket transform and clip state the way canvas save/restore
/// does: every `translate`/`rotate`/`scale`/`clip_rect` between a push and
/// its pop is undone by the pop.
pub trait Surface {
    /// Reset the frame to a blank surface
    fn clear(&mut self, size: Vec2);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);
    fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: &str, line_width: f32);
    fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: &str);
    fn stroke_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: &str, line_width: f32);

    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, tilt: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32);

    fn fill_path(&mut self, path: &[PathCmd], color: &str);
    fn stroke_path(&mut self, path: &[PathCmd], color: &str, line_width: f32);

    fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str);

    /// Vertical linear gradient filling the given rectangle
    fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: &str, bottom: &str);
    /// Radial falloff from `color` at `inner` radius to transparent at `outer`
    fn fill_radial_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: &str);

    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, by: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: Vec2);
    /// Restrict subsequent drawing to a rectangle until the enclosing pop
    fn clip_rect(&mut self, pos: Vec2, size: Vec2);
}
