//! Entity types
//!
//! Entities are plain data with their own integration step. They never reach into each
//! other; cross-entity effects (damage, score, bursts) are resolved by the tick.

use std::collections::VecDeque;

use glam::Vec2;

use crate::color::Color;
use crate::consts::*;

/// Trail sample for player rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub pos: Vec2,
    pub alpha: f32,
}

/// The player's avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    health: f32,
    /// Past positions, oldest first
    pub trail: VecDeque<TrailDot>,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            health: PLAYER_MAX_HEALTH,
            trail: VecDeque::new(),
        }
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Move by `vel * dt`, record a trail sample and fade the older ones
    pub fn update(&mut self, dt: f32, vel: Vec2) {
        self.pos += vel * dt;

        self.trail.push_back(TrailDot {
            pos: self.pos,
            alpha: PLAYER_TRAIL_START_ALPHA,
        });
        for dot in self.trail.iter_mut() {
            dot.alpha -= PLAYER_TRAIL_FADE_RATE * dt;
        }
        self.trail.retain(|dot| dot.alpha > 0.0);
    }

    /// Fire toward a world-space point.
    ///
    /// The bullet starts just outside the player's rim. Aiming at the player's exact
    /// position gives a non-finite direction; such a bullet never hits anything and
    /// expires normally.
    pub fn shoot(&self, target: Vec2) -> Bullet {
        let dir = (target - self.pos).normalize();
        Bullet::new(
            self.pos + dir * (PLAYER_RADIUS + BULLET_RADIUS),
            dir * BULLET_SPEED,
        )
    }

    /// Apply damage, flooring health at zero.
    ///
    /// Returns true if the hit should be audible: the blow that ends the player is
    /// left to the death cue.
    pub fn damage(&mut self, amount: f32) -> bool {
        self.health = (self.health - amount).max(0.0);
        self.health > 1.0
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(PLAYER_MAX_HEALTH);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds remaining; the bullet is dropped once this reaches zero
    pub lifetime: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            lifetime: BULLET_LIFETIME,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub dead: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, dead: false }
    }

    /// Step straight toward `follow` at enemy speed
    pub fn update(&mut self, dt: f32, follow: Vec2) {
        let step = (follow - self.pos).normalize() * ENEMY_SPEED * dt;
        self.pos += step;
    }
}

/// A short-lived burst fragment (visual only)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lifetime: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Fades against the maximum lifetime, not the particle's own starting lifetime
    pub fn alpha(&self) -> f32 {
        self.lifetime / PARTICLE_LIFETIME
    }
}

/// Borrowed view over any entity, used by the renderer
#[derive(Debug, Clone, Copy)]
pub enum EntityRef<'a> {
    Player(&'a Player),
    Bullet(&'a Bullet),
    Enemy(&'a Enemy),
    Particle(&'a Particle),
}
