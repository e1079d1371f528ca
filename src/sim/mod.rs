//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of rendering and platform
//! dependencies:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Side effects (sound) leave as `GameEvent`s for the caller to act on

pub mod camera;
pub mod collision;
pub mod entity;
pub mod input;
pub mod state;
pub mod tick;
pub mod tutorial;

pub use camera::Camera;
pub use collision::circles_overlap;
pub use entity::{Bullet, Enemy, EntityRef, Particle, Player, TrailDot};
pub use input::{Direction, MoveKeys};
pub use state::{Game, GameEvent, Palette, RenderMode};
pub use tick::tick;
pub use tutorial::{FadeEvent, Popup, Tutorial, TutorialStage};
