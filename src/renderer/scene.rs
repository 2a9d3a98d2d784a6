//! Scene translation: game state in, draw calls out
//!
//! Pure function of the current state. Never mutates the simulation and can
//! be invoked any number of times per state; a fixed state always produces
//! the same primitive stream.

use glam::Vec2;
use std::f32::consts::PI;

use super::surface::{PathCmd, Surface};
use crate::sim::{BackVariant, Card, CardLook, GameState, Obstacle};

const GOLD: &str = "#FFD700";
const CURTAIN_RED: &str = "#b71c1c";
const BAND_RED: &str = "#d32f2f";
const HAT_BLACK: &str = "#1a1a1a";

/// Wand pole width under/over each hat
const POLE_WIDTH: f32 = 12.0;
/// Hat width / height
const HAT_ASPECT: f32 = 1.2;
/// How far the rabbit peeks out of the gap
const RABBIT_PEEK: f32 = 30.0;

/// Paint one frame of the current state
pub fn draw(state: &GameState, surface: &mut impl Surface) {
    let field = state.field;
    surface.clear(field);
    draw_background(field, surface);

    for obs in &state.obstacles {
        draw_obstacle(obs, field.y, surface);
    }

    if let Some(card) = &state.card {
        draw_card(card, surface);
    }
}

/// Stage backdrop: night sky, spotlight, floor, red curtains with gold trim
fn draw_background(field: Vec2, surface: &mut impl Surface) {
    let (w, h) = (field.x, field.y);

    surface.fill_vertical_gradient(Vec2::ZERO, field, "#1a0b2e", "#4a2b7e");
    surface.fill_radial_glow(
        Vec2::new(w / 2.0, h / 2.0),
        50.0,
        400.0,
        "rgba(255, 255, 200, 0.1)",
    );

    // Floor boards
    surface.fill_rect(Vec2::new(0.0, h - 50.0), Vec2::new(w, 50.0), "#3e2723");
    surface.fill_rect(Vec2::new(0.0, h - 50.0), Vec2::new(w, 5.0), "#5d4037");

    // Main side curtains
    surface.fill_path(&curtain(0.0, 120.0, h, h), CURTAIN_RED);
    surface.fill_path(&curtain(w, w - 120.0, h, h), CURTAIN_RED);

    // Inner layer, darker
    surface.fill_path(&curtain(0.0, 80.0, h / 3.0 * 2.0, h * 0.8), "#880e4f");
    surface.fill_path(&curtain(w, w - 80.0, h / 3.0 * 2.0, h * 0.8), "#880e4f");

    // Corner swags
    surface.fill_path(&swag(0.0, w * 0.25, h), "#7f0000");
    surface.fill_path(&swag(w, w * 0.75, h), "#7f0000");

    // Gold tie-back ropes
    surface.stroke_path(&rope(0.0, w * 0.1, h), GOLD, 3.0);
    surface.stroke_path(&rope(w, w * 0.9, h), GOLD, 3.0);

    // Scalloped valance across the top, with gold trim
    let scallops = valance(w);
    surface.fill_path(&scallops, BAND_RED);
    surface.stroke_path(&scallops, GOLD, 2.0);
}

/// One hanging side curtain as a quadratic bulge from edge_x toward mid_x
fn curtain(edge_x: f32, mid_x: f32, mid_y: f32, bottom_y: f32) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(Vec2::new(edge_x, 0.0)),
        PathCmd::QuadTo {
            ctrl: Vec2::new(mid_x, mid_y / 2.0),
            to: Vec2::new(edge_x, bottom_y),
        },
    ]
}

fn swag(edge_x: f32, bulge_x: f32, h: f32) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(Vec2::new(edge_x, 0.0)),
        PathCmd::QuadTo {
            ctrl: Vec2::new(bulge_x, h * 0.15),
            to: Vec2::new(edge_x, h * 0.4),
        },
    ]
}

fn rope(edge_x: f32, bulge_x: f32, h: f32) -> Vec<PathCmd> {
    vec![
        PathCmd::MoveTo(Vec2::new(edge_x, h * 0.25)),
        PathCmd::QuadTo {
            ctrl: Vec2::new(bulge_x, h * 0.3),
            to: Vec2::new(edge_x, h * 0.35),
        },
    ]
}

fn valance(w: f32) -> Vec<PathCmd> {
    const SCALLOPS: u32 = 7;
    let sw = w / SCALLOPS as f32;
    let mut path = vec![PathCmd::MoveTo(Vec2::ZERO)];
    for i in 0..SCALLOPS {
        path.push(PathCmd::QuadTo {
            ctrl: Vec2::new(i as f32 * sw + sw / 2.0, 60.0),
            to: Vec2::new((i + 1) as f32 * sw, 0.0),
        });
    }
    path.push(PathCmd::LineTo(Vec2::new(w, 0.0)));
    path.push(PathCmd::Close);
    path
}

/// Two opposing top hats on wand poles, gap between them, optional rabbit
fn draw_obstacle(obs: &Obstacle, field_height: f32, surface: &mut impl Surface) {
    let hat_w = obs.width;
    let hat_h = hat_w / HAT_ASPECT;
    let pole_x = obs.x + obs.width / 2.0 - POLE_WIDTH / 2.0;

    // Upper wand, tip pointing down at the hat
    let top_pole_h = obs.top_height - hat_h;
    if top_pole_h > 0.0 {
        surface.fill_rect(
            Vec2::new(pole_x, 0.0),
            Vec2::new(POLE_WIDTH, top_pole_h),
            "#000",
        );
        surface.fill_rect(
            Vec2::new(pole_x, top_pole_h - 10.0),
            Vec2::new(POLE_WIDTH, 10.0),
            "#fff",
        );
    }

    // Lower wand
    let bottom_pole_y = obs.gap_bottom() + hat_h;
    let bottom_pole_h = field_height - bottom_pole_y;
    if bottom_pole_h > 0.0 {
        surface.fill_rect(
            Vec2::new(pole_x, bottom_pole_y),
            Vec2::new(POLE_WIDTH, bottom_pole_h),
            "#000",
        );
        surface.fill_rect(
            Vec2::new(pole_x, bottom_pole_y),
            Vec2::new(POLE_WIDTH, 10.0),
            "#fff",
        );
    }

    // Upright hat capping the upper segment, brim toward the gap
    draw_hat(Vec2::new(obs.x, obs.top_height - hat_h), hat_w, hat_h, surface);

    // Inverted hat capping the lower segment: flip vertically around the gap
    // bottom so its brim also faces the gap
    surface.push();
    surface.translate(Vec2::new(obs.x + obs.width / 2.0, obs.gap_bottom()));
    surface.scale(Vec2::new(1.0, -1.0));
    draw_hat(Vec2::new(-hat_w / 2.0, -hat_h), hat_w, hat_h, surface);
    surface.pop();

    if obs.has_rabbit {
        draw_rabbit(
            Vec2::new(obs.x + 10.0, obs.gap_bottom() - RABBIT_PEEK),
            obs.width - 20.0,
            RABBIT_PEEK + 10.0,
            surface,
        );
    }
}

fn draw_hat(pos: Vec2, w: f32, h: f32, surface: &mut impl Surface) {
    let (x, y) = (pos.x, pos.y);
    let inset = w * 0.25;
    let flare = 5.0;

    // Cup: slim trapezoid with a slight flare at the crown
    surface.fill_path(
        &[
            PathCmd::MoveTo(Vec2::new(x + inset, y + h * 0.8)),
            PathCmd::LineTo(Vec2::new(x + w - inset, y + h * 0.8)),
            PathCmd::LineTo(Vec2::new(x + w - inset + flare, y)),
            PathCmd::LineTo(Vec2::new(x + inset - flare, y)),
            PathCmd::Close,
        ],
        HAT_BLACK,
    );

    surface.fill_rect(
        Vec2::new(x + inset, y + h * 0.5),
        Vec2::new(w - inset * 2.0, h * 0.2),
        BAND_RED,
    );

    // Brim with its dark inner opening
    let brim_center = Vec2::new(x + w / 2.0, y + h * 0.8);
    surface.fill_ellipse(brim_center, Vec2::new(w * 0.7, h * 0.2), 0.0, HAT_BLACK);
    surface.fill_ellipse(brim_center, Vec2::new(w * 0.3, h * 0.08), 0.0, "#000");
}

fn draw_rabbit(pos: Vec2, w: f32, h: f32, surface: &mut impl Surface) {
    let (x, y) = (pos.x, pos.y);

    // Ears, tilted outward
    surface.fill_ellipse(
        Vec2::new(x + w * 0.3, y),
        Vec2::new(w * 0.15, h * 0.4),
        -0.2,
        "#fff",
    );
    surface.fill_ellipse(
        Vec2::new(x + w * 0.7, y),
        Vec2::new(w * 0.15, h * 0.4),
        0.2,
        "#fff",
    );
    surface.fill_ellipse(
        Vec2::new(x + w * 0.3, y),
        Vec2::new(w * 0.08, h * 0.25),
        -0.2,
        "#f8bbd0",
    );
    surface.fill_ellipse(
        Vec2::new(x + w * 0.7, y),
        Vec2::new(w * 0.08, h * 0.25),
        0.2,
        "#f8bbd0",
    );

    let head = Vec2::new(x + w / 2.0, y + h * 0.6);
    surface.fill_ellipse(head, Vec2::splat(w * 0.35), 0.0, "#fff");

    surface.fill_ellipse(
        Vec2::new(x + w * 0.35, y + h * 0.55),
        Vec2::splat(2.0),
        0.0,
        "#000",
    );
    surface.fill_ellipse(
        Vec2::new(x + w * 0.65, y + h * 0.55),
        Vec2::splat(2.0),
        0.0,
        "#000",
    );
    surface.fill_ellipse(
        Vec2::new(x + w / 2.0, y + h * 0.65),
        Vec2::splat(3.0),
        0.0,
        "#f48fb1",
    );
}

/// The player card, rotated around its center by the display tilt
fn draw_card(card: &Card, surface: &mut impl Surface) {
    let half = card.size / 2.0;

    surface.push();
    surface.translate(card.pos + half);
    surface.rotate(card.rotation);

    match card.look {
        CardLook::Face { rank, suit } => draw_card_face(-half, card.size, rank, suit, surface),
        CardLook::Back { variant } => draw_card_back(-half, card.size, variant, surface),
    }

    surface.pop();
}

fn draw_card_face(
    pos: Vec2,
    size: Vec2,
    rank: &str,
    suit: crate::sim::Suit,
    surface: &mut impl Surface,
) {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);

    surface.fill_round_rect(pos, size, 4.0, "#fff");
    surface.stroke_round_rect(pos, size, 4.0, "#000", 2.0);

    let ink = if suit.is_red() { BAND_RED } else { "#000" };

    // Corner index, top-left
    surface.fill_text(rank, Vec2::new(x + 10.0, y + 16.0), "bold 14px Arial", ink);
    surface.fill_text(suit.glyph(), Vec2::new(x + 10.0, y + 28.0), "12px Arial", ink);

    // Mirrored duplicate, bottom-right
    surface.push();
    surface.translate(Vec2::new(x + w - 10.0, y + h - 16.0));
    surface.rotate(PI);
    surface.fill_text(rank, Vec2::ZERO, "bold 14px Arial", ink);
    surface.fill_text(suit.glyph(), Vec2::new(0.0, 12.0), "12px Arial", ink);
    surface.pop();

    // Center pip
    surface.fill_text(
        suit.glyph(),
        Vec2::new(x + w / 2.0, y + h / 2.0 + 8.0),
        "20px Arial",
        ink,
    );
}

fn draw_card_back(pos: Vec2, size: Vec2, variant: BackVariant, surface: &mut impl Surface) {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);
    let pad = 4.0;

    surface.fill_round_rect(pos, size, 4.0, "#fff");
    surface.stroke_round_rect(pos, size, 4.0, "#000", 1.0);

    surface.push();
    surface.clip_rect(
        Vec2::new(x + pad, y + pad),
        Vec2::new(w - pad * 2.0, h - pad * 2.0),
    );

    match variant {
        BackVariant::Crosshatch => {
            surface.fill_rect(pos, size, "#1565c0");
            let mut hatch = Vec::new();
            let mut i = 0.0;
            while i < w + h {
                hatch.push(PathCmd::MoveTo(Vec2::new(x + i - h, y)));
                hatch.push(PathCmd::LineTo(Vec2::new(x + i, y + h)));
                i += 6.0;
            }
            surface.stroke_path(&hatch, "#42a5f5", 1.0);
        }
        BackVariant::DiamondLattice => {
            surface.fill_rect(pos, size, "#b71c1c");
            let mut lattice = Vec::new();
            let mut i = 0.0;
            while i < w {
                let mut j = 0.0;
                while j < h {
                    lattice.push(PathCmd::MoveTo(Vec2::new(x + i + 5.0, y + j)));
                    lattice.push(PathCmd::LineTo(Vec2::new(x + i + 10.0, y + j + 5.0)));
                    lattice.push(PathCmd::LineTo(Vec2::new(x + i + 5.0, y + j + 10.0)));
                    lattice.push(PathCmd::LineTo(Vec2::new(x + i, y + j + 5.0)));
                    lattice.push(PathCmd::Close);
                    j += 10.0;
                }
                i += 10.0;
            }
            surface.fill_path(&lattice, BAND_RED);
        }
        BackVariant::Rings => {
            surface.fill_rect(pos, size, "#212121");
            let center = Vec2::new(x + w / 2.0, y + h / 2.0);
            surface.stroke_circle(center, 10.0, GOLD, 1.0);
            surface.stroke_circle(center, 20.0, GOLD, 1.0);
        }
    }

    surface.stroke_rect(
        Vec2::new(x + pad, y + pad),
        Vec2::new(w - pad * 2.0, h - pad * 2.0),
        GOLD,
        2.0,
    );
    surface.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Suit};

    /// Records every primitive as a formatted line
    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<String>,
    }

    impl RecordingSurface {
        fn op(&mut self, s: String) {
            self.ops.push(s);
        }
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, size: Vec2) {
            self.op(format!("clear {size}"));
        }
        fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
            self.op(format!("fill_rect {pos} {size} {color}"));
        }
        fn stroke_rect(&mut self, pos: Vec2, size: Vec2, color: &str, line_width: f32) {
            self.op(format!("stroke_rect {pos} {size} {color} {line_width}"));
        }
        fn fill_round_rect(&mut self, pos: Vec2, size: Vec2, radius: f32, color: &str) {
            self.op(format!("fill_round_rect {pos} {size} {radius} {color}"));
        }
        fn stroke_round_rect(
            &mut self,
            pos: Vec2,
            size: Vec2,
            radius: f32,
            color: &str,
            line_width: f32,
        ) {
            self.op(format!(
                "stroke_round_rect {pos} {size} {radius} {color} {line_width}"
            ));
        }
        fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, tilt: f32, color: &str) {
            self.op(format!("fill_ellipse {center} {radii} {tilt} {color}"));
        }
        fn stroke_circle(&mut self, center: Vec2, radius: f32, color: &str, line_width: f32) {
            self.op(format!("stroke_circle {center} {radius} {color} {line_width}"));
        }
        fn fill_path(&mut self, path: &[PathCmd], color: &str) {
            self.op(format!("fill_path {} {color}", path.len()));
        }
        fn stroke_path(&mut self, path: &[PathCmd], color: &str, line_width: f32) {
            self.op(format!("stroke_path {} {color} {line_width}", path.len()));
        }
        fn fill_text(&mut self, text: &str, pos: Vec2, font: &str, color: &str) {
            self.op(format!("fill_text {text} {pos} {font} {color}"));
        }
        fn fill_vertical_gradient(&mut self, pos: Vec2, size: Vec2, top: &str, bottom: &str) {
            self.op(format!("vgradient {pos} {size} {top} {bottom}"));
        }
        fn fill_radial_glow(&mut self, center: Vec2, inner: f32, outer: f32, color: &str) {
            self.op(format!("glow {center} {inner} {outer} {color}"));
        }
        fn push(&mut self) {
            self.op("push".into());
        }
        fn pop(&mut self) {
            self.op("pop".into());
        }
        fn translate(&mut self, by: Vec2) {
            self.op(format!("translate {by}"));
        }
        fn rotate(&mut self, radians: f32) {
            self.op(format!("rotate {radians}"));
        }
        fn scale(&mut self, factor: Vec2) {
            self.op(format!("scale {factor}"));
        }
        fn clip_rect(&mut self, pos: Vec2, size: Vec2) {
            self.op(format!("clip_rect {pos} {size}"));
        }
    }

    fn sample_state() -> GameState {
        let mut state = GameState::new(12, 480.0, 400.0);
        state.begin_run();
        state.obstacles.push(crate::sim::Obstacle {
            x: 300.0,
            width: 60.0,
            top_height: 120.0,
            gap: 170.0,
            passed: false,
            has_rabbit: true,
        });
        state
    }

    #[test]
    fn same_state_draws_identically() {
        let state = sample_state();
        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        draw(&state, &mut a);
        draw(&state, &mut b);
        assert!(!a.ops.is_empty());
        assert_eq!(a.ops, b.ops);
    }

    #[test]
    fn pushes_and_pops_balance() {
        let state = sample_state();
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        let pushes = surface.ops.iter().filter(|o| *o == "push").count();
        let pops = surface.ops.iter().filter(|o| *o == "pop").count();
        assert_eq!(pushes, pops);
        assert!(pushes > 0);
    }

    #[test]
    fn face_card_draws_rank_text() {
        let mut state = sample_state();
        state.card.as_mut().unwrap().look = CardLook::Face {
            rank: "Q",
            suit: Suit::Spades,
        };
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        assert!(surface.ops.iter().any(|o| o.starts_with("fill_text Q")));
    }

    #[test]
    fn back_card_clips_and_draws_no_text() {
        let mut state = sample_state();
        state.card.as_mut().unwrap().look = CardLook::Back {
            variant: BackVariant::Rings,
        };
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        assert!(surface.ops.iter().any(|o| o.starts_with("clip_rect")));
        assert!(!surface.ops.iter().any(|o| o.starts_with("fill_text")));
        assert!(surface.ops.iter().any(|o| o.starts_with("stroke_circle")));
    }

    #[test]
    fn rabbit_marker_adds_primitives() {
        let mut with = sample_state();
        let mut without = with.clone();
        without.obstacles[0].has_rabbit = false;

        let mut a = RecordingSurface::default();
        let mut b = RecordingSurface::default();
        draw(&with, &mut a);
        draw(&without, &mut b);
        assert!(a.ops.len() > b.ops.len());
    }

    #[test]
    fn idle_state_draws_backdrop_only() {
        let state = GameState::new(12, 480.0, 400.0);
        let mut surface = RecordingSurface::default();
        draw(&state, &mut surface);
        // No card, no obstacles: nothing but the stage
        assert!(!surface.ops.iter().any(|o| o.starts_with("fill_round_rect")));
        assert!(surface.ops.iter().any(|o| o.starts_with("vgradient")));
    }
}
