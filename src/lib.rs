//! Circle Shooter - a top-down survival shooter on an endless plane
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, spawning, tutorial, camera)
//! - `color`: RGBA colors and hex palette parsing
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `audio`: Rate-limited sound cues
//! - `driver`: Per-frame update/render driver
//! - `platform`: Browser/native glue (key bindings, canvas surface)
//! - `settings`: Persisted player preferences

pub mod audio;
pub mod color;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::{Color, ColorParseError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player avatar
    pub const PLAYER_RADIUS: f32 = 48.0;
    pub const PLAYER_SPEED: f32 = 600.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Alpha lost per second by each trail sample
    pub const PLAYER_TRAIL_FADE_RATE: f32 = 3.0;
    /// Alpha of a freshly recorded trail sample
    pub const PLAYER_TRAIL_START_ALPHA: f32 = 0.75;

    pub const BULLET_RADIUS: f32 = 6.0;
    pub const BULLET_SPEED: f32 = PLAYER_SPEED * 3.0;
    /// Seconds a bullet lives; keeps the bullet list bounded
    pub const BULLET_LIFETIME: f32 = 5.0;

    pub const ENEMY_RADIUS: f32 = PLAYER_RADIUS - 6.0;
    pub const ENEMY_SPEED: f32 = PLAYER_SPEED / 3.0;
    /// Initial seconds between spawns
    pub const ENEMY_SPAWN_COOLDOWN: f32 = 1.0;
    pub const ENEMY_SPAWN_DISTANCE: f32 = 500.0;
    /// Spawn interval shrinks by this much after every spawn...
    pub const ENEMY_SPAWN_RATE_DECREMENT: f32 = 0.01;
    /// ...but never below this
    pub const ENEMY_SPAWN_RATE_MIN: f32 = 0.01;
    pub const ENEMY_DAMAGE: f32 = PLAYER_MAX_HEALTH / 5.0;
    pub const ENEMY_KILL_HEAL: f32 = PLAYER_MAX_HEALTH / 20.0;
    pub const ENEMY_KILL_SCORE: u64 = 100;

    /// Upper bound (exclusive) on particles per burst
    pub const PARTICLE_COUNT: usize = 50;
    pub const PARTICLE_RADIUS: f32 = 5.0;
    /// Added to every particle's random radius
    pub const PARTICLE_RADIUS_OFFSET: f32 = 5.0;
    pub const PARTICLE_MAGNITUDE: f32 = BULLET_SPEED;
    pub const PARTICLE_LIFETIME: f32 = 1.0;

    /// Simulation slow-down once the player is dead
    pub const BULLET_TIME_FACTOR: f32 = 50.0;

    /// Popup alpha change per second
    pub const POPUP_FADE_RATE: f32 = 1.0;

    /// HUD layout
    pub const HEALTH_BAR_HEIGHT: f32 = 15.0;
    /// Viewports narrower than this use the small font
    pub const SMALL_SCREEN_WIDTH: f32 = 640.0;

    /// Palette, parsed once when a game is created
    pub const PLAYER_COLOR_HEX: &str = "#72b1e5";
    pub const BULLET_COLOR_HEX: &str = "#e7b80b";
    pub const ENEMY_COLOR_HEX: &str = "#df7171";
    pub const MESSAGE_COLOR_HEX: &str = "#ffffff";
    pub const HEALTH_BAR_COLOR_HEX: &str = "#51bb51";

    /// Minimum wall-clock seconds between retriggers of each sound cue
    pub const GUNFIRE_CUE_COOLDOWN: f64 = 0.05;
    pub const HIT_CUE_COOLDOWN: f64 = 0.1;
    pub const DEATH_CUE_COOLDOWN: f64 = 1.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
