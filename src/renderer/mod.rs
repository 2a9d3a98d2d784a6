//! Rendering module
//!
//! `scene` turns game state into draw calls against the `Surface` capability;
//! `canvas` is the browser CanvasRenderingContext2d implementation of it.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use scene::draw;
pub use surface::{PathCmd, Surface};
