//! Platform glue
//!
//! - `input`: keyboard bindings (physical key codes to game actions)
//! - `canvas`: browser 2D canvas drawing surface (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod input;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use input::{Action, KeyBindings};
