//! Collision detection and response
//!
//! Everything in the game is a circle, so detection is a distance test against the sum
//! of radii. Response is resolved here rather than on the entities, since a single
//! contact touches score, health, particles and events at once.

use glam::Vec2;

use super::state::{Game, GameEvent};
use crate::consts::*;

/// True if two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) <= ra + rb
}

/// Resolve enemy contacts with bullets and with the player.
///
/// Both checks for an enemy use its state from before its own resolution: an enemy
/// that meets a bullet and the player in the same tick scores the kill and also
/// damages the player. Every overlapping bullet counts, including one already spent
/// on another enemy earlier in the same pass.
pub(super) fn resolve(game: &mut Game) {
    for i in 0..game.enemies.len() {
        let enemy_pos = game.enemies[i].pos;
        let was_dead = game.enemies[i].dead;
        if was_dead {
            continue;
        }

        let mut hits = 0;
        for bullet in game.bullets.iter_mut() {
            if circles_overlap(enemy_pos, ENEMY_RADIUS, bullet.pos, BULLET_RADIUS) {
                bullet.lifetime = 0.0;
                hits += 1;
            }
        }
        for _ in 0..hits {
            game.score += ENEMY_KILL_SCORE;
            game.player.heal(ENEMY_KILL_HEAL);
            game.enemies[i].dead = true;
            game.particle_burst(enemy_pos, game.palette.enemy);
            game.emit(GameEvent::EnemyKilled);
        }
        if hits > 0 {
            log::debug!("Enemy shot, score {}", game.score);
        }

        if game.player.is_alive()
            && circles_overlap(enemy_pos, ENEMY_RADIUS, game.player.pos, PLAYER_RADIUS)
        {
            let audible = game.player.damage(ENEMY_DAMAGE);
            if audible {
                game.emit(GameEvent::PlayerHit);
            }
            if !game.player.is_alive() {
                log::info!("Player died with score {}", game.score);
                game.emit(GameEvent::PlayerDied);
            }
            game.enemies[i].dead = true;
            game.particle_burst(enemy_pos, game.palette.player);
        }
    }
}
