//! Two-profile blend settings.
use serde::{Deserialize, Serialize};

use crate::EmotionLabel;

/// Smallest warmth/clarity scale accepted; anything at or below zero is lifted here.
pub const MIN_BLEND_SCALE: f32 = 0.01;

/// Settings for interpolating between two emotion profiles.
///
/// `ratio` 0.0 is fully `label_a`, 1.0 fully `label_b`. `warmth` scales the
/// blended pitch and `clarity` the blended rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    pub label_a: EmotionLabel,
    pub label_b: EmotionLabel,
    pub ratio: f32,
    pub warmth: f32,
    pub clarity: f32,
}

impl BlendConfig {
    /// Create a blend config, clamping every numeric field to its domain.
    pub fn new(
        label_a: EmotionLabel,
        label_b: EmotionLabel,
        ratio: f32,
        warmth: f32,
        clarity: f32,
    ) -> Self {
        Self {
            label_a,
            label_b,
            ratio,
            warmth,
            clarity,
        }
        .sanitized()
    }

    /// Copy with `ratio` in [0, 1] and `warmth`/`clarity` strictly positive.
    ///
    /// Non-finite ratios fall back to the midpoint, non-finite scales to 1.0.
    pub fn sanitized(self) -> Self {
        let ratio = if self.ratio.is_finite() {
            self.ratio.clamp(0.0, 1.0)
        } else {
            0.5
        };
        Self {
            ratio,
            warmth: sanitize_scale(self.warmth),
            clarity: sanitize_scale(self.clarity),
            ..self
        }
    }

    /// Whether [`sanitized`](Self::sanitized) would change any field.
    pub fn needs_sanitizing(&self) -> bool {
        let clean = self.sanitized();
        self.ratio.to_bits() != clean.ratio.to_bits()
            || self.warmth.to_bits() != clean.warmth.to_bits()
            || self.clarity.to_bits() != clean.clarity.to_bits()
    }

    /// Ratio as a whole percentage, as shown next to the blend slider.
    pub fn ratio_percent(&self) -> u32 {
        (self.ratio.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            label_a: EmotionLabel::Normal,
            label_b: EmotionLabel::Normal,
            ratio: 0.5,
            warmth: 1.0,
            clarity: 1.0,
        }
    }
}

fn sanitize_scale(value: f32) -> f32 {
    if !value.is_finite() {
        1.0
    } else {
        value.max(MIN_BLEND_SCALE)
    }
}
