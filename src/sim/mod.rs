//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick integration only
//! - Seeded RNG only
//! - Stable iteration order (obstacles kept in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, card_hits_obstacle, hits_bounds};
pub use state::{BackVariant, Card, CardLook, GamePhase, GameState, Obstacle, Suit};
pub use tick::{GameEvent, TickInput, tick};
