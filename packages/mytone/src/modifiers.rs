//! Multiplicative emotion modifiers for direct speech.
//!
//! This table is relative: factors scale whatever pitch and rate the caller
//! already chose. The blend engine uses a separate table of absolute base
//! values (see [`crate::blend`]); the two are kept apart on purpose.

use mytone_domain::{EmotionLabel, UtteranceParameters};

/// What a modifier does to volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VolumeRule {
    /// Replace the volume with a fixed value.
    Set(f32),
    /// Leave the caller's volume untouched.
    Keep,
}

/// Per-label adjustment applied on top of base parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionModifier {
    pub pitch_factor: f32,
    pub rate_factor: f32,
    pub volume: VolumeRule,
}

impl EmotionModifier {
    /// No-op modifier used for labels without an entry.
    pub const IDENTITY: Self = Self::new(1.0, 1.0, VolumeRule::Keep);

    const fn new(pitch_factor: f32, rate_factor: f32, volume: VolumeRule) -> Self {
        Self {
            pitch_factor,
            rate_factor,
            volume,
        }
    }

    /// Apply to `base`. The result is not clamped.
    pub fn apply(&self, base: UtteranceParameters) -> UtteranceParameters {
        UtteranceParameters {
            pitch: base.pitch * self.pitch_factor,
            rate: base.rate * self.rate_factor,
            volume: match self.volume {
                VolumeRule::Set(volume) => volume,
                VolumeRule::Keep => base.volume,
            },
        }
    }
}

/// Modifier table lookup.
pub const fn modifier_for(label: EmotionLabel) -> EmotionModifier {
    use VolumeRule::Set;
    match label {
        EmotionLabel::Happy => EmotionModifier::new(1.25, 1.15, Set(1.0)),
        EmotionLabel::Sad => EmotionModifier::new(0.85, 0.90, Set(0.9)),
        EmotionLabel::Friendly => EmotionModifier::new(1.12, 1.03, Set(1.0)),
        EmotionLabel::Soft => EmotionModifier::new(0.95, 0.90, Set(0.82)),
        EmotionLabel::Energetic => EmotionModifier::new(1.35, 1.30, Set(1.0)),
        EmotionLabel::Calm => EmotionModifier::new(0.90, 0.92, Set(0.95)),
        EmotionLabel::Professional => EmotionModifier::new(0.98, 1.00, Set(1.0)),
        EmotionLabel::Storytelling => EmotionModifier::new(1.05, 0.93, Set(0.98)),
        EmotionLabel::Angry | EmotionLabel::Questioning | EmotionLabel::Normal => {
            EmotionModifier::IDENTITY
        }
    }
}

/// Apply `label`'s modifiers to `base`.
///
/// `base` must already carry real values (1.0 where the caller had nothing);
/// the result may fall outside the global ranges and is clamped by whoever
/// finalizes the request.
pub fn apply_modifiers(base: UtteranceParameters, label: EmotionLabel) -> UtteranceParameters {
    modifier_for(label).apply(base)
}
