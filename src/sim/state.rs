//! Game state and core simulation types
//!
//! Everything the simulation owns lives in [`Game`]. Randomness comes from a seeded
//! PCG stream so a run is reproducible from its seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::camera::Camera;
use super::entity::{Bullet, Enemy, Particle, Player};
use super::input::MoveKeys;
use super::tutorial::Tutorial;
use crate::color::{Color, ColorParseError};
use crate::consts::*;
use crate::polar_to_cartesian;

/// Things that happened during a tick or input action that the outside world
/// (audio, logging) may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A bullet was fired
    Gunfire,
    /// The player took a non-fatal hit
    PlayerHit,
    /// The player's health reached zero
    PlayerDied,
    EnemyKilled,
    EnemySpawned,
}

/// Global look of the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Normal,
    /// Drained colors while paused or dead
    Grayscale,
}

impl RenderMode {
    pub fn apply(self, color: Color) -> Color {
        match self {
            RenderMode::Normal => color,
            RenderMode::Grayscale => color.grayscale(),
        }
    }
}

/// Colors used by the game, parsed from the hex constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub player: Color,
    pub bullet: Color,
    pub enemy: Color,
    pub message: Color,
    pub health_bar: Color,
}

impl Palette {
    pub fn new() -> Result<Self, ColorParseError> {
        Ok(Self {
            player: Color::from_hex(PLAYER_COLOR_HEX)?,
            bullet: Color::from_hex(BULLET_COLOR_HEX)?,
            enemy: Color::from_hex(ENEMY_COLOR_HEX)?,
            message: Color::from_hex(MESSAGE_COLOR_HEX)?,
            health_bar: Color::from_hex(HEALTH_BAR_COLOR_HEX)?,
        })
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Game {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub palette: Palette,
    pub player: Player,
    /// Movement from held keys
    pub vel: Vec2,
    pub(super) keys: MoveKeys,
    pub tutorial: Tutorial,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub score: u64,
    pub paused: bool,
    /// Seconds until the next spawn
    pub spawn_cooldown: f32,
    /// Interval the cooldown resets to; shrinks with every spawn
    pub spawn_rate: f32,
    pub camera: Camera,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a new game with the given seed
    pub fn new(seed: u64) -> Result<Self, ColorParseError> {
        Ok(Self::with_palette(seed, Palette::new()?))
    }

    pub fn with_palette(seed: u64, palette: Palette) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            palette,
            player: Player::new(Vec2::ZERO),
            vel: Vec2::ZERO,
            keys: MoveKeys::default(),
            tutorial: Tutorial::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            score: 0,
            paused: false,
            spawn_cooldown: ENEMY_SPAWN_COOLDOWN,
            spawn_rate: ENEMY_SPAWN_COOLDOWN,
            camera: Camera::new(),
            events: Vec::new(),
        }
    }

    /// Grayscale while paused or after death
    pub fn render_mode(&self) -> RenderMode {
        if self.paused || !self.player.is_alive() {
            RenderMode::Grayscale
        } else {
            RenderMode::Normal
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Spawn one enemy on a circle around the player
    pub fn spawn_enemy(&mut self) {
        let dir = self.rng.random_range(0.0..std::f32::consts::TAU);
        let pos = self.player.pos + polar_to_cartesian(ENEMY_SPAWN_DISTANCE, dir);
        log::debug!("Enemy spawned at ({:.0}, {:.0})", pos.x, pos.y);
        self.enemies.push(Enemy::new(pos));
        self.emit(GameEvent::EnemySpawned);
    }

    /// Emit a random handful of particles flying out of `centre`
    pub fn particle_burst(&mut self, centre: Vec2, color: Color) {
        let count = self.rng.random_range(0..PARTICLE_COUNT);
        self.particles.reserve(count);
        for _ in 0..count {
            let magnitude = self.rng.random::<f32>() * PARTICLE_MAGNITUDE;
            let dir = self.rng.random::<f32>() * std::f32::consts::TAU;
            let lifetime = self.rng.random::<f32>() * PARTICLE_LIFETIME;
            let radius = self.rng.random::<f32>() * PARTICLE_RADIUS + PARTICLE_RADIUS_OFFSET;
            self.particles.push(Particle {
                pos: centre,
                vel: polar_to_cartesian(magnitude, dir),
                lifetime,
                radius,
                color,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new(1).unwrap();
        assert_eq!(game.player.health(), PLAYER_MAX_HEALTH);
        assert_eq!(game.spawn_cooldown, ENEMY_SPAWN_COOLDOWN);
        assert_eq!(game.spawn_rate, ENEMY_SPAWN_COOLDOWN);
        assert!(game.bullets.is_empty() && game.enemies.is_empty() && game.particles.is_empty());
        assert_eq!(game.render_mode(), RenderMode::Normal);
    }

    #[test]
    fn test_render_mode_follows_pause_and_death() {
        let mut game = Game::new(1).unwrap();
        game.toggle_pause();
        assert_eq!(game.render_mode(), RenderMode::Grayscale);
        game.toggle_pause();
        assert_eq!(game.render_mode(), RenderMode::Normal);

        game.player.damage(PLAYER_MAX_HEALTH);
        assert_eq!(game.render_mode(), RenderMode::Grayscale);
    }

    #[test]
    fn test_spawn_distance() {
        let mut game = Game::new(7).unwrap();
        game.player.pos = Vec2::new(30.0, -40.0);
        for _ in 0..20 {
            game.spawn_enemy();
        }
        for enemy in &game.enemies {
            let d = enemy.pos.distance(game.player.pos);
            assert!((d - ENEMY_SPAWN_DISTANCE).abs() < 0.01);
        }
        assert_eq!(game.drain_events().len(), 20);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_particle_burst_ranges() {
        let mut game = Game::new(42).unwrap();
        let colour = game.palette.enemy;
        for _ in 0..10 {
            game.particle_burst(Vec2::new(1.0, 2.0), colour);
        }
        assert!(game.particles.len() < 10 * PARTICLE_COUNT);
        for p in &game.particles {
            assert_eq!(p.pos, Vec2::new(1.0, 2.0));
            assert_eq!(p.color, colour);
            assert!(p.vel.length() < PARTICLE_MAGNITUDE + 0.01);
            assert!((0.0..PARTICLE_LIFETIME).contains(&p.lifetime));
            assert!(p.radius >= PARTICLE_RADIUS_OFFSET);
            assert!(p.radius < PARTICLE_RADIUS + PARTICLE_RADIUS_OFFSET);
        }
    }

    #[test]
    fn test_same_seed_same_bursts() {
        let mut a = Game::new(99999).unwrap();
        let mut b = Game::new(99999).unwrap();
        a.particle_burst(Vec2::ZERO, Color::WHITE);
        b.particle_burst(Vec2::ZERO, Color::WHITE);
        assert_eq!(a.particles, b.particles);
    }
}
