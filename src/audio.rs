//! Procedural sound effects over the Web Audio API
//!
//! Every effect is a handful of oscillator voices; there are no sample files.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::game::EventSink;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile fired
    Shoot,
    /// Enemy shot down
    EnemyDestroyed,
    /// Player hit
    GameOver,
}

impl From<&GameEvent> for SoundEffect {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::Fired { .. } => SoundEffect::Shoot,
            GameEvent::EnemyDestroyed { .. } => SoundEffect::EnemyDestroyed,
            GameEvent::PlayerHit { .. } => SoundEffect::GameOver,
        }
    }
}

/// Plays [`SoundEffect`]s for game events
pub struct AudioManager {
    /// Missing outside a secure context; every effect is then a no-op
    ctx: Option<AudioContext>,
    /// Master x sfx, or zero when muted
    volume: f32,
}

impl AudioManager {
    pub fn from_settings(settings: &Settings) -> Self {
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("AudioContext unavailable, sound disabled");
        }
        let mut audio = Self { ctx, volume: 0.0 };
        audio.apply_settings(settings);
        audio
    }

    /// Pick up changed volume or mute preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = if settings.muted {
            0.0
        } else {
            settings.master_volume.clamp(0.0, 1.0) * settings.sfx_volume.clamp(0.0, 1.0)
        };
    }

    /// Must be called from a user gesture before the first sound
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a sound effect. Failures are logged and otherwise ignored.
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.volume;
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let now = ctx.current_time();
        let played = effect
            .tones()
            .iter()
            .all(|tone| tone.schedule(ctx, now, vol).is_some());
        if !played {
            log::warn!("Audio play error: {:?}", effect);
        }
    }
}

impl SoundEffect {
    /// Oscillator voices making up the effect
    fn tones(self) -> Vec<Tone> {
        match self {
            // Short rising chirp
            SoundEffect::Shoot => vec![Tone {
                wave: OscillatorType::Square,
                freq: (600.0, 1200.0),
                gain: 0.15,
                delay: 0.0,
                length: 0.08,
            }],
            // Low zap under a bright crack
            SoundEffect::EnemyDestroyed => vec![
                Tone {
                    wave: OscillatorType::Sawtooth,
                    freq: (3000.0, 40.0),
                    gain: 0.4,
                    delay: 0.0,
                    length: 0.25,
                },
                Tone {
                    wave: OscillatorType::Square,
                    freq: (1500.0, 1500.0),
                    gain: 0.15,
                    delay: 0.0,
                    length: 0.1,
                },
            ],
            // Four falling notes
            SoundEffect::GameOver => [400.0, 350.0, 300.0, 200.0]
                .iter()
                .enumerate()
                .map(|(i, &f)| Tone {
                    wave: OscillatorType::Sine,
                    freq: (f, f),
                    gain: 0.3,
                    delay: i as f64 * 0.2,
                    length: 0.3,
                })
                .collect(),
        }
    }
}

/// One oscillator with a pitch sweep and exponential decay
struct Tone {
    wave: OscillatorType,
    /// Start and end frequency (Hz)
    freq: (f32, f32),
    /// Peak gain before volume scaling
    gain: f32,
    /// Seconds after `now`
    delay: f64,
    /// Decay time in seconds
    length: f64,
}

impl Tone {
    fn schedule(&self, ctx: &AudioContext, now: f64, vol: f32) -> Option<()> {
        let osc: OscillatorNode = ctx.create_oscillator().ok()?;
        let amp: GainNode = ctx.create_gain().ok()?;
        osc.set_type(self.wave);
        osc.connect_with_audio_node(&amp).ok()?;
        amp.connect_with_audio_node(&ctx.destination()).ok()?;

        let t = now + self.delay;
        let end = t + self.length;
        let (from, to) = self.freq;
        osc.frequency().set_value_at_time(from, t).ok()?;
        if to != from {
            osc.frequency().exponential_ramp_to_value_at_time(to, end).ok()?;
        }
        amp.gain().set_value_at_time(vol * self.gain, t).ok()?;
        amp.gain().exponential_ramp_to_value_at_time(0.01, end).ok()?;

        osc.start_with_when(t).ok()?;
        osc.stop_with_when(end + 0.05).ok()
    }
}

impl EventSink for AudioManager {
    fn on_event(&mut self, event: &GameEvent) {
        self.play(SoundEffect::from(event));
    }
}
