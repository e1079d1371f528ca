//! Per-frame simulation update
//!
//! Advances the game by a variable `dt` (wall-clock seconds since the previous frame).
//! Step order matters: collisions see bullets after this tick's motion, and enemies
//! killed this tick still take their movement step before being dropped.

use super::collision;
use super::state::Game;
use crate::consts::*;

/// Advance the game state by `dt` seconds
pub fn tick(game: &mut Game, dt: f32) {
    if game.paused {
        return;
    }

    // Bullet time
    let dt = if game.player.is_alive() {
        dt
    } else {
        dt / BULLET_TIME_FACTOR
    };

    game.camera.set_target(game.player.pos);
    game.camera.update(dt);

    game.player.update(dt, game.vel);
    game.tutorial.update(dt);

    for bullet in game.bullets.iter_mut() {
        bullet.update(dt);
    }
    game.bullets.retain(|b| b.is_alive());

    for particle in game.particles.iter_mut() {
        particle.update(dt);
    }
    game.particles.retain(|p| p.is_alive());

    collision::resolve(game);

    let follow = game.player.pos;
    for enemy in game.enemies.iter_mut() {
        enemy.update(dt, follow);
    }
    game.enemies.retain(|e| !e.dead);

    if game.tutorial.is_finished() {
        game.spawn_cooldown -= dt;
        if game.spawn_cooldown <= 0.0 {
            game.spawn_enemy();
            game.spawn_cooldown = game.spawn_rate;
            game.spawn_rate =
                (game.spawn_rate - ENEMY_SPAWN_RATE_DECREMENT).max(ENEMY_SPAWN_RATE_MIN);
        }
    }
}

impl Game {
    pub fn update(&mut self, dt: f32) {
        tick(self, dt);
    }
}
