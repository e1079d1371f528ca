//! Frame driver
//!
//! Owns everything that lives across frames: the game, the frame clock, key bindings,
//! settings and the cue player. The host calls [`FrameDriver::frame`] once per
//! animation frame and forwards input events between frames.

use glam::Vec2;

use crate::audio::{Cue, CueGates, CuePlayer};
use crate::platform::{Action, KeyBindings};
use crate::renderer::{Surface, render_game};
use crate::settings::Settings;
use crate::sim::Game;

/// Turns host timestamps (milliseconds) into frame deltas (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous call; 0 on the first
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp_ms);
        dt
    }
}

pub struct FrameDriver<P: CuePlayer> {
    pub game: Game,
    pub settings: Settings,
    pub keys: KeyBindings,
    clock: FrameClock,
    gates: CueGates,
    player: P,
}

impl<P: CuePlayer> FrameDriver<P> {
    pub fn new(game: Game, settings: Settings, mut player: P) -> Self {
        player.apply_settings(&settings);
        Self {
            game,
            settings,
            keys: KeyBindings::default(),
            clock: FrameClock::default(),
            gates: CueGates::default(),
            player,
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    /// Update, draw, then play the cues this frame raised
    pub fn frame(&mut self, timestamp_ms: f64, surface: &mut dyn Surface) {
        let dt = self.clock.advance(timestamp_ms);

        self.game
            .camera
            .set_viewport(surface.width(), surface.height());
        self.game.update(dt);
        render_game(&self.game, surface);

        let now = timestamp_ms / 1000.0;
        for event in self.game.drain_events() {
            if let Some(cue) = Cue::for_event(event) {
                if self.gates.admit(cue, now) {
                    self.player.play(cue);
                }
            }
        }
    }

    /// Returns true if the key is bound
    pub fn key_down(&mut self, code: &str) -> bool {
        let Some(action) = self.keys.action(code) else {
            return false;
        };
        match action {
            Action::Move(dir) => self.game.move_key_down(dir),
            Action::TogglePause => self.game.toggle_pause(),
            Action::ToggleMute => {
                self.settings.toggle_mute();
                self.settings.save();
                self.player.apply_settings(&self.settings);
            }
        }
        true
    }

    /// Returns true if the key is bound
    pub fn key_up(&mut self, code: &str) -> bool {
        match self.keys.action(code) {
            Some(Action::Move(dir)) => {
                self.game.move_key_up(dir);
                true
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Mouse press at a screen point
    pub fn click(&mut self, x: f32, y: f32) {
        self.game.shoot_at(Vec2::new(x, y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::{Enemy, TutorialStage};

    #[derive(Default)]
    struct Recorder {
        played: Vec<Cue>,
        muted: bool,
    }

    impl CuePlayer for Recorder {
        fn play(&mut self, cue: Cue) {
            self.played.push(cue);
        }

        fn apply_settings(&mut self, settings: &Settings) {
            self.muted = settings.muted;
        }
    }

    fn driver() -> FrameDriver<Recorder> {
        FrameDriver::new(Game::new(9).unwrap(), Settings::default(), Recorder::default())
    }

    #[test]
    fn test_clock_first_frame_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.advance(1234.0), 0.0);
        assert!((clock.advance(1250.0) - 0.016).abs() < 1e-6);
        assert!((clock.advance(1750.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_frame_tracks_viewport_and_draws() {
        let mut d = driver();
        let mut surface = RecordingSurface::new(1024.0, 768.0);
        d.frame(0.0, &mut surface);
        assert_eq!(d.game.camera.viewport(), Vec2::new(1024.0, 768.0));
        assert!(!surface.commands.is_empty());

        surface.resize(320.0, 240.0);
        d.frame(16.0, &mut surface);
        assert_eq!(d.game.camera.viewport(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_keys_drive_game() {
        let mut d = driver();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        assert!(d.key_down("KeyD"));
        d.frame(0.0, &mut surface);
        d.frame(500.0, &mut surface);
        assert!((d.game.player.pos.x - PLAYER_SPEED * 0.5).abs() < 1e-3);
        assert!(d.key_up("KeyD"));
        assert_eq!(d.game.vel, Vec2::ZERO);
        assert_eq!(d.game.tutorial.stage(), TutorialStage::LearningToShoot);

        assert!(d.key_down("Space"));
        assert!(d.game.paused);
        assert!(!d.key_down("KeyQ"));
    }

    #[test]
    fn test_gunfire_cues_are_rate_limited() {
        let mut d = driver();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        d.frame(0.0, &mut surface);

        // Two shots inside one frame, one cue
        d.click(500.0, 300.0);
        d.click(500.0, 300.0);
        d.frame(1000.0, &mut surface);
        assert_eq!(d.player().played, vec![Cue::Gunfire]);

        // 30ms later: still cooling down
        d.click(500.0, 300.0);
        d.frame(1030.0, &mut surface);
        assert_eq!(d.player().played.len(), 1);

        d.click(500.0, 300.0);
        d.frame(1100.0, &mut surface);
        assert_eq!(d.player().played, vec![Cue::Gunfire, Cue::Gunfire]);
    }

    #[test]
    fn test_death_cue() {
        let mut d = driver();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        d.game.player.damage(PLAYER_MAX_HEALTH - ENEMY_DAMAGE);
        d.game.enemies.push(Enemy::new(Vec2::new(10.0, 0.0)));
        d.frame(0.0, &mut surface);
        assert_eq!(d.player().played, vec![Cue::Death]);
        assert!(!d.game.player.is_alive());
    }

    #[test]
    fn test_mute_toggle_reaches_player() {
        let mut d = driver();
        assert!(d.key_down("KeyM"));
        assert!(d.settings.muted);
        assert!(d.player().muted);
        d.key_down("KeyM");
        assert!(!d.player().muted);
    }
}
