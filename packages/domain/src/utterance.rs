//! Pitch/rate/volume triple handed to a speech engine.
use serde::{Deserialize, Serialize};

use crate::param_range::{PITCH_RANGE, RATE_RANGE, VOLUME_RANGE};

/// Numeric synthesis parameters.
///
/// Built fresh for every request. Intermediate values (after modifier
/// composition or blending) may sit outside the accepted ranges; call
/// [`UtteranceParameters::clamped`] before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtteranceParameters {
    /// Pitch multiplier, 0.1..=2.0 once clamped.
    pub pitch: f32,
    /// Speaking rate multiplier, 0.5..=2.0 once clamped.
    pub rate: f32,
    /// Loudness, 0.0..=1.0 once clamped.
    pub volume: f32,
}

impl UtteranceParameters {
    pub const fn new(pitch: f32, rate: f32, volume: f32) -> Self {
        Self {
            pitch,
            rate,
            volume,
        }
    }

    /// Copy with every field clamped to its global range.
    pub fn clamped(self) -> Self {
        Self {
            pitch: PITCH_RANGE.clamp(self.pitch),
            rate: RATE_RANGE.clamp(self.rate),
            volume: VOLUME_RANGE.clamp(self.volume),
        }
    }

    /// Whether every field already lies in its global range.
    pub fn is_in_range(&self) -> bool {
        PITCH_RANGE.contains(self.pitch)
            && RATE_RANGE.contains(self.rate)
            && VOLUME_RANGE.contains(self.volume)
    }
}

impl Default for UtteranceParameters {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}
