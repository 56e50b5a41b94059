//! Sound effect hand-off
//!
//! The simulation never plays audio. Hosts drain [`GameEvent`]s after each
//! tick and pass them through [`dispatch_events`] to whatever backend they
//! use (mixer, web audio, or nothing at all).

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A cat was collected
    Meow,
}

impl SoundEffect {
    /// Playback volume (0.0 - 1.0) the effect is mixed at
    pub fn volume(&self) -> f32 {
        match self {
            SoundEffect::Meow => 0.6,
        }
    }

    /// Sound triggered by an event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CatCollected { .. } => Some(SoundEffect::Meow),
            _ => None,
        }
    }
}

/// Backend that can play sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards everything (headless runs and tests)
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs effects instead of playing them
#[derive(Debug)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl Default for LogAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl LogAudio {
    pub fn new() -> Self {
        Self {
            muted: false,
            played: 0,
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Effects played (muted effects are not counted)
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::info!("♪ {:?} (volume {:.1})", effect, effect.volume());
    }
}

/// Play the sound for every event that has one; returns how many were played
pub fn dispatch_events(events: &[GameEvent], sink: &mut impl AudioSink) -> usize {
    let mut count = 0;
    for effect in events.iter().filter_map(SoundEffect::for_event) {
        sink.play(effect);
        count += 1;
    }
    count
}
