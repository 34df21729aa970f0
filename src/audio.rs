//! Sound-trigger dispatch
//!
//! The simulation only emits `GameEvent`s. The play scene hands them to an
//! `AudioManager`, which maps them to effects and forwards them to whatever
//! backend the host injected. Backend failures never reach the game: they
//! are logged and counted.

use crate::error::AudioError;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Formation step
    Move,
    /// Player fires
    Shoot,
    /// Alien or bonus target destroyed
    Explosion,
    /// Player hit
    PlayerDeath,
    /// Missile chips a base
    Impact,
    /// Looping drone while the bonus target is on screen
    BonusLoop,
}

impl SoundEffect {
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Move => "move",
            SoundEffect::Shoot => "shoot",
            SoundEffect::Explosion => "explosion",
            SoundEffect::PlayerDeath => "player_death",
            SoundEffect::Impact => "impact",
            SoundEffect::BonusLoop => "bonus_loop",
        }
    }
}

/// What the manager should do for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Play(SoundEffect),
    StartLoop(SoundEffect),
    StopLoop(SoundEffect),
}

impl Cue {
    pub fn for_event(event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::AlienMoved => Some(Cue::Play(SoundEffect::Move)),
            GameEvent::PlayerShot => Some(Cue::Play(SoundEffect::Shoot)),
            GameEvent::AlienDestroyed { .. } | GameEvent::BonusDestroyed { .. } => {
                Some(Cue::Play(SoundEffect::Explosion))
            }
            GameEvent::BaseHit { .. } => Some(Cue::Play(SoundEffect::Impact)),
            GameEvent::PlayerKilled { .. } => Some(Cue::Play(SoundEffect::PlayerDeath)),
            GameEvent::BonusSpawned => Some(Cue::StartLoop(SoundEffect::BonusLoop)),
            GameEvent::BonusRetired => Some(Cue::StopLoop(SoundEffect::BonusLoop)),
            _ => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
    fn start_loop(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError>;
    fn stop_loop(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
}

/// Backend that only logs; used by the headless binary
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::trace!("sfx {} @ {:.2}", effect.name(), volume);
        Ok(())
    }

    fn start_loop(&mut self, effect: SoundEffect, volume: f32) -> Result<(), AudioError> {
        log::trace!("loop start {} @ {:.2}", effect.name(), volume);
        Ok(())
    }

    fn stop_loop(&mut self, effect: SoundEffect) -> Result<(), AudioError> {
        log::trace!("loop stop {}", effect.name());
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
    /// Swallowed backend failures, for telemetry
    failures: u32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::disabled()
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend: Some(backend),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            failures: 0,
        }
    }

    /// A manager with no output; every cue is dropped
    pub fn disabled() -> Self {
        Self {
            backend: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            failures: 0,
        }
    }

    pub fn with_settings(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        let mut manager = Self::new(backend);
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager.set_muted(settings.muted);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Forward one cue to the backend, absorbing any failure
    pub fn cue(&mut self, cue: Cue) {
        let vol = self.effective_volume();
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        let result = match cue {
            Cue::Play(effect) if vol > 0.0 => backend.play(effect, vol),
            Cue::StartLoop(effect) if vol > 0.0 => backend.start_loop(effect, vol),
            Cue::StopLoop(effect) => backend.stop_loop(effect),
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.failures += 1;
            log::debug!("Audio cue {:?} dropped: {}", cue, e);
        }
    }

    /// Play a one-shot effect
    pub fn play(&mut self, effect: SoundEffect) {
        self.cue(Cue::Play(effect));
    }

    /// React to a simulation event
    pub fn handle_event(&mut self, event: &GameEvent) {
        if let Some(cue) = Cue::for_event(event) {
            self.cue(cue);
        }
    }
}
