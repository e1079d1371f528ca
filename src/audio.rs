//! Sound cues
//!
//! The simulation only raises [`GameEvent`]s. At the frame boundary the driver maps
//! them to [`Cue`]s, rate-limits each cue kind against wall-clock time (so cues keep
//! their pacing during bullet time) and hands the survivors to a [`CuePlayer`].
//!
//! On the web, cues are synthesized with the Web Audio API - no sample files needed.
//! Playback is fire-and-forget: failures are logged and never reach the game.

use crate::consts::{DEATH_CUE_COOLDOWN, GUNFIRE_CUE_COOLDOWN, HIT_CUE_COOLDOWN};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Bullet fired
    Gunfire,
    /// Player hit, still alive
    Hit,
    /// Player died
    Death,
}

impl Cue {
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::Gunfire => Some(Cue::Gunfire),
            GameEvent::PlayerHit => Some(Cue::Hit),
            GameEvent::PlayerDied => Some(Cue::Death),
            GameEvent::EnemyKilled | GameEvent::EnemySpawned => None,
        }
    }

    /// Minimum seconds between two plays of this cue
    pub fn cooldown(self) -> f64 {
        match self {
            Cue::Gunfire => GUNFIRE_CUE_COOLDOWN,
            Cue::Hit => HIT_CUE_COOLDOWN,
            Cue::Death => DEATH_CUE_COOLDOWN,
        }
    }
}

/// Lets a trigger through at most once per `interval` seconds
#[derive(Debug, Clone)]
pub struct CooldownGate {
    interval: f64,
    last: Option<f64>,
}

impl CooldownGate {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns true and restarts the cooldown if `now` is far enough past the last trigger
    pub fn try_trigger(&mut self, now: f64) -> bool {
        let open = self.last.is_none_or(|last| now - last > self.interval);
        if open {
            self.last = Some(now);
        }
        open
    }
}

/// One gate per cue kind
#[derive(Debug, Clone)]
pub struct CueGates {
    gunfire: CooldownGate,
    hit: CooldownGate,
    death: CooldownGate,
}

impl Default for CueGates {
    fn default() -> Self {
        Self {
            gunfire: CooldownGate::new(Cue::Gunfire.cooldown()),
            hit: CooldownGate::new(Cue::Hit.cooldown()),
            death: CooldownGate::new(Cue::Death.cooldown()),
        }
    }
}

impl CueGates {
    pub fn admit(&mut self, cue: Cue, now: f64) -> bool {
        let gate = match cue {
            Cue::Gunfire => &mut self.gunfire,
            Cue::Hit => &mut self.hit,
            Cue::Death => &mut self.death,
        };
        gate.try_trigger(now)
    }
}

/// Something that can make noise
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);

    /// Pick up volume and mute changes
    fn apply_settings(&mut self, _settings: &Settings) {}
}

/// Player for hosts without audio
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, cue: Cue) {
        log::trace!("cue {:?}", cue);
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Cue, CuePlayer};
    use crate::settings::Settings;

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: settings.effective_volume(),
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Gunfire - short suppressed snap
        fn play_gunfire(&self, ctx: &AudioContext, vol: f32) -> Option<()> {
            let t = ctx.current_time();

            let (osc, gain) = self.create_osc(ctx, 900.0, OscillatorType::Square)?;
            gain.gain().set_value_at_time(vol * 0.15, t).ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.05)
                .ok()?;
            osc.frequency().set_value_at_time(900.0, t).ok()?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(150.0, t + 0.05)
                .ok()?;
            osc.start().ok()?;
            osc.stop_with_when(t + 0.06).ok()?;

            // Low body
            let (osc, gain) = self.create_osc(ctx, 120.0, OscillatorType::Sine)?;
            gain.gain().set_value_at_time(vol * 0.3, t).ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.08)
                .ok()?;
            osc.start().ok()?;
            osc.stop_with_when(t + 0.1).ok()
        }

        /// Hit - solid thump
        fn play_hit(&self, ctx: &AudioContext, vol: f32) -> Option<()> {
            let (osc, gain) = self.create_osc(ctx, 150.0, OscillatorType::Sine)?;
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.6, t).ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok()?;
            osc.frequency().set_value_at_time(150.0, t).ok()?;
            osc.frequency()
                .exponential_ramp_to_value_at_time(50.0, t + 0.15)
                .ok()?;

            osc.start().ok()?;
            osc.stop_with_when(t + 0.2).ok()
        }

        /// Death - slow descending fade
        fn play_death(&self, ctx: &AudioContext, vol: f32) -> Option<()> {
            for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
                let t = ctx.current_time() + i as f64 * 0.2;
                let (osc, gain) = self.create_osc(ctx, *freq, OscillatorType::Sine)?;
                gain.gain().set_value_at_time(vol * 0.3, t).ok()?;
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok()?;
                osc.start_with_when(t).ok()?;
                osc.stop_with_when(t + 0.4).ok()?;
            }
            Some(())
        }
    }

    impl CuePlayer for AudioManager {
        fn apply_settings(&mut self, settings: &Settings) {
            self.volume = settings.effective_volume();
        }

        fn play(&mut self, cue: Cue) {
            let vol = self.volume;
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let played = match cue {
                Cue::Gunfire => self.play_gunfire(ctx, vol),
                Cue::Hit => self.play_hit(ctx, vol),
                Cue::Death => self.play_death(ctx, vol),
            };
            if played.is_none() {
                log::warn!("Audio failed: {:?}", cue);
            }
        }
    }
}
