//! Scene drawing: entities, status messages and HUD

use super::{Painter, Surface};
use crate::consts::*;
use crate::sim::{EntityRef, Game, Palette};

const PAUSE_MESSAGE: &str = "Game paused, press 'SPACE' to resume";
const DEATH_MESSAGE: &str = "Fading into oblivion, 'F5 (Win) or CMD+R (Mac)' to restart";

/// Draw one entity
pub fn render_entity(entity: EntityRef<'_>, painter: &mut Painter<'_>, palette: &Palette) {
    match entity {
        EntityRef::Player(player) => {
            // Trail tapers toward the oldest sample
            let n = player.trail.len() as f32;
            for (i, dot) in player.trail.iter().enumerate() {
                let radius = PLAYER_RADIUS * (i as f32 / n);
                painter.fill_circle(dot.pos, radius, palette.player.with_alpha(dot.alpha));
            }
            if player.is_alive() {
                painter.fill_circle(player.pos, PLAYER_RADIUS, palette.player);
            }
        }
        EntityRef::Bullet(bullet) => {
            painter.fill_circle(bullet.pos, BULLET_RADIUS, palette.bullet.with_alpha(0.8));
        }
        EntityRef::Enemy(enemy) => {
            painter.fill_circle(enemy.pos, ENEMY_RADIUS, palette.enemy);
        }
        EntityRef::Particle(particle) => {
            painter.fill_circle(
                particle.pos,
                particle.radius,
                particle.color.with_alpha(particle.alpha()),
            );
        }
    }
}

/// Draw a full frame of the game
pub fn render_game(game: &Game, surface: &mut dyn Surface) {
    let palette = &game.palette;
    let mut painter = Painter::new(surface, &game.camera, game.render_mode());
    let width = painter.width();
    let height = painter.height();

    painter.clear();

    render_entity(EntityRef::Player(&game.player), &mut painter, palette);
    for bullet in &game.bullets {
        render_entity(EntityRef::Bullet(bullet), &mut painter, palette);
    }
    for particle in &game.particles {
        render_entity(EntityRef::Particle(particle), &mut painter, palette);
    }
    for enemy in &game.enemies {
        render_entity(EntityRef::Enemy(enemy), &mut painter, palette);
    }

    if game.paused {
        painter.message(PAUSE_MESSAGE, palette.message);
    } else if !game.player.is_alive() {
        painter.message(DEATH_MESSAGE, palette.enemy);
    } else {
        let popup = &game.tutorial.popup;
        painter.message(popup.text, palette.message.with_alpha(popup.alpha));
    }

    // Health bar
    let bar_y = height - height / 13.0;
    let health_frac = game.player.health() / PLAYER_MAX_HEALTH;
    painter.fill_rect(
        width / 4.0,
        bar_y,
        (width / 2.0) * health_frac,
        HEALTH_BAR_HEIGHT,
        palette.health_bar.with_alpha(0.9),
    );
    painter.stroke_rect(
        width / 4.0,
        bar_y,
        width / 2.0,
        HEALTH_BAR_HEIGHT,
        palette.message.with_alpha(0.9),
    );

    painter.text(
        width / 2.0,
        height / 13.0,
        &format!("SCORE: {}", game.score),
        palette.message.with_alpha(0.5),
    );
}
