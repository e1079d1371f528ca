//! Player input actions
//!
//! Input arrives between frames (key and mouse events) and mutates the game directly.
//! The host serializes these with the frame callback, so no locking is involved.

use glam::Vec2;

use super::state::{Game, GameEvent};
use crate::consts::PLAYER_SPEED;

/// Axis-aligned movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector in screen orientation (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which movement keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveKeys {
    held: [bool; 4],
}

impl MoveKeys {
    /// Mark pressed; false if it was already held (key repeat)
    pub fn press(&mut self, dir: Direction) -> bool {
        !std::mem::replace(&mut self.held[dir.index()], true)
    }

    pub fn release(&mut self, dir: Direction) {
        self.held[dir.index()] = false;
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()]
    }
}

impl Game {
    pub fn move_key_down(&mut self, dir: Direction) {
        if !self.keys.press(dir) {
            return;
        }
        self.vel += dir.unit() * PLAYER_SPEED;
        self.tutorial.player_moved();
    }

    /// Releasing a key stops all motion along its axis, even if the opposite key is
    /// still held
    pub fn move_key_up(&mut self, dir: Direction) {
        self.keys.release(dir);
        match dir {
            Direction::Up | Direction::Down => self.vel.y = 0.0,
            Direction::Left | Direction::Right => self.vel.x = 0.0,
        }
        self.tutorial.player_moved();
    }

    /// Fire at a screen-space point. Ignored while paused or dead.
    pub fn shoot_at(&mut self, screen_point: Vec2) {
        if self.paused || !self.player.is_alive() {
            return;
        }

        self.tutorial.player_shot();
        let target = self.camera.to_world(screen_point);
        let bullet = self.player.shoot(target);
        self.bullets.push(bullet);
        self.emit(GameEvent::Gunfire);
    }
}
