//! Host feedback seams
//!
//! The simulation reports what happened through `GameEvent`s; this module
//! turns drained events into audio and haptic cues through capability traits
//! the host implements. A host without the hardware plugs in `Silent` and
//! the game plays on unaffected.

use crate::consts::{GAME_OVER_PULSE_MS, TILT_PULSE_MS};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cues; the host decides what each one sounds like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A game began
    Start,
    /// Tilt reversed (tap acknowledged)
    Tilt,
    /// Ball reached an end
    GameOver,
}

/// Plays sound cues.
///
/// Implementations must be fire-and-forget and never call back into the
/// simulation; a multi-tone game-over jingle may run on its own thread.
pub trait AudioCue {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Drives the vibration motor, if there is one.
pub trait HapticFeedback {
    fn pulse(&mut self, millis: u32);
}

/// No-op audio and haptics for hosts without the hardware
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
}

impl HapticFeedback for Silent {
    fn pulse(&mut self, _millis: u32) {}
}

/// Routes drained simulation events to the injected cue backends.
pub struct Feedback<A, H> {
    pub audio: A,
    pub haptics: H,
}

impl<A: AudioCue, H: HapticFeedback> Feedback<A, H> {
    pub fn new(audio: A, haptics: H) -> Self {
        Self { audio, haptics }
    }

    /// Map one event to its cues, honoring the settings toggles.
    pub fn handle(&mut self, event: &GameEvent, settings: &Settings) {
        let volume = settings.effective_volume();
        match event {
            GameEvent::GameStarted => {
                if volume > 0.0 {
                    self.audio.play(SoundEffect::Start, volume);
                }
            }
            GameEvent::TiltChanged => {
                if settings.haptics {
                    self.haptics.pulse(TILT_PULSE_MS);
                }
                if volume > 0.0 {
                    self.audio.play(SoundEffect::Tilt, volume);
                }
            }
            GameEvent::GameOver { .. } => {
                if settings.haptics {
                    self.haptics.pulse(GAME_OVER_PULSE_MS);
                }
                if volume > 0.0 {
                    self.audio.play(SoundEffect::GameOver, volume);
                }
            }
        }
    }

    /// Convenience for a whole drained batch
    pub fn handle_all(&mut self, events: &[GameEvent], settings: &Settings) {
        for event in events {
            self.handle(event, settings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Player;

    #[derive(Default)]
    struct RecordingAudio(Vec<SoundEffect>);

    impl AudioCue for RecordingAudio {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.0.push(effect);
        }
    }

    #[derive(Default)]
    struct RecordingHaptics(Vec<u32>);

    impl HapticFeedback for RecordingHaptics {
        fn pulse(&mut self, millis: u32) {
            self.0.push(millis);
        }
    }

    #[test]
    fn test_event_to_cue_mapping() {
        let settings = Settings::default();
        let mut feedback = Feedback::new(RecordingAudio::default(), RecordingHaptics::default());

        feedback.handle_all(
            &[
                GameEvent::GameStarted,
                GameEvent::TiltChanged,
                GameEvent::GameOver {
                    winner: Player::One,
                },
            ],
            &settings,
        );

        assert_eq!(
            feedback.audio.0,
            vec![SoundEffect::Start, SoundEffect::Tilt, SoundEffect::GameOver]
        );
        assert_eq!(feedback.haptics.0, vec![TILT_PULSE_MS, GAME_OVER_PULSE_MS]);
    }

    #[test]
    fn test_muted_audio_keeps_haptics() {
        let settings = Settings {
            audio: false,
            ..Settings::default()
        };
        let mut feedback = Feedback::new(RecordingAudio::default(), RecordingHaptics::default());

        feedback.handle(&GameEvent::TiltChanged, &settings);
        assert!(feedback.audio.0.is_empty());
        assert_eq!(feedback.haptics.0, vec![TILT_PULSE_MS]);
    }

    #[test]
    fn test_haptics_toggle() {
        let settings = Settings {
            haptics: false,
            ..Settings::default()
        };
        let mut feedback = Feedback::new(RecordingAudio::default(), RecordingHaptics::default());

        feedback.handle(
            &GameEvent::GameOver {
                winner: Player::Two,
            },
            &settings,
        );
        assert_eq!(feedback.audio.0, vec![SoundEffect::GameOver]);
        assert!(feedback.haptics.0.is_empty());
    }

    #[test]
    fn test_silent_backends_do_nothing() {
        let settings = Settings::default();
        let mut feedback = Feedback::new(Silent, Silent);
        // Just must not panic or require hardware
        feedback.handle(&GameEvent::GameStarted, &settings);
    }
}
