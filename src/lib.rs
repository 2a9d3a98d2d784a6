//! Flappy Card - a magic-show themed arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, run lifecycle)
//! - `renderer`: Pure state -> 2D draw-call translation behind a surface capability
//! - `audio`: Web Audio sound cues (wasm only)
//! - `bestscore`: Persisted best-score record

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod bestscore;
pub mod renderer;
pub mod sim;

pub use bestscore::BestScore;

/// Game configuration constants
pub mod consts {
    /// Downward acceleration applied to the card every tick (px/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Velocity assigned on a jump (negative = upward, px/tick)
    pub const JUMP_IMPULSE: f32 = -4.5;

    /// Card dimensions and fixed horizontal position
    pub const CARD_X: f32 = 50.0;
    pub const CARD_WIDTH: f32 = 40.0;
    pub const CARD_HEIGHT: f32 = 56.0;

    /// Display tilt: rotation = clamp(velocity * scale, ±ROTATION_CLAMP)
    pub const ROTATION_SCALE: f32 = 0.1;
    pub const ROTATION_CLAMP: f32 = std::f32::consts::FRAC_PI_4;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 170.0;
    /// Minimum height of either solid segment above/below the gap
    pub const MIN_SEGMENT_HEIGHT: f32 = 80.0;

    /// One obstacle spawns every this many ticks while a run is active
    pub const SPAWN_INTERVAL_TICKS: u64 = 120;
    /// Chance a spawned obstacle carries the decorative rabbit
    pub const RABBIT_CHANCE: f32 = 0.3;

    /// Scroll speed at the start of a run (px/tick)
    pub const SCROLL_SPEED_START: f32 = 2.2;
    /// Speed bump applied whenever the score reaches a multiple of 5
    pub const SPEED_INCREMENT: f32 = 0.1;
    pub const SPEED_STEP_SCORE: u32 = 5;

    /// Chance a passed obstacle flips the card face-down
    pub const CARD_BACK_CHANCE: f32 = 0.3;
}
