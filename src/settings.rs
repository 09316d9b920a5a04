//! Game settings and speed presets
//!
//! The host surfaces these in its UI. Nothing here touches storage; the
//! game keeps no state between runs.

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_SPEED_SECS;

/// Traversal-time presets offered by the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    /// 4 seconds center to edge
    #[default]
    Sprint,
    /// 6 seconds
    Standard,
    /// 8 seconds
    Extended,
    /// 10 seconds
    Marathon,
}

impl SpeedPreset {
    /// Every preset, in UI order
    pub const ALL: [SpeedPreset; 4] = [
        SpeedPreset::Sprint,
        SpeedPreset::Standard,
        SpeedPreset::Extended,
        SpeedPreset::Marathon,
    ];

    /// Seconds for the ball to travel from center to an edge
    pub fn seconds(&self) -> f32 {
        match self {
            SpeedPreset::Sprint => DEFAULT_SPEED_SECS,
            SpeedPreset::Standard => 6.0,
            SpeedPreset::Extended => 8.0,
            SpeedPreset::Marathon => 10.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Sprint => "4s",
            SpeedPreset::Standard => "6s",
            SpeedPreset::Extended => "8s",
            SpeedPreset::Marathon => "10s",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().trim_end_matches('s') {
            "4" => Some(SpeedPreset::Sprint),
            "6" => Some(SpeedPreset::Standard),
            "8" => Some(SpeedPreset::Extended),
            "10" => Some(SpeedPreset::Marathon),
            _ => None,
        }
    }
}

/// Host-facing options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Selected traversal time
    pub speed: SpeedPreset,
    /// Sound cues on/off
    pub audio: bool,
    /// Vibration on/off
    pub haptics: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: SpeedPreset::default(),
            audio: true,
            haptics: true,
            master_volume: 0.8,
        }
    }
}

impl Settings {
    /// Seconds for the configured preset
    pub fn speed_secs(&self) -> f32 {
        self.speed.seconds()
    }

    /// Effective cue volume, zero when audio is off
    pub fn effective_volume(&self) -> f32 {
        if self.audio {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}
