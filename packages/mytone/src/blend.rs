//! Two-profile blend engine.
//!
//! Blending works on absolute base values, not on the relative factors in
//! [`crate::modifiers`]. The tables overlap in labels but not in meaning.

use mytone_domain::{BlendConfig, EmotionLabel, UtteranceParameters};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Absolute pitch/rate for one emotion profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseValues {
    pub pitch: f32,
    pub rate: f32,
}

impl BaseValues {
    const fn new(pitch: f32, rate: f32) -> Self {
        Self { pitch, rate }
    }
}

/// Base value table lookup. Labels without an entry use `normal`'s values.
pub const fn base_values(label: EmotionLabel) -> BaseValues {
    match label {
        EmotionLabel::Happy => BaseValues::new(1.25, 1.1),
        EmotionLabel::Sad => BaseValues::new(0.85, 0.9),
        EmotionLabel::Friendly => BaseValues::new(1.15, 1.0),
        EmotionLabel::Soft => BaseValues::new(0.95, 0.9),
        EmotionLabel::Energetic => BaseValues::new(1.35, 1.25),
        EmotionLabel::Calm => BaseValues::new(0.9, 0.92),
        _ => BaseValues::new(1.0, 1.0),
    }
}

/// Raw blend result plus its audit label, e.g. `happy+sad@50%`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendOutcome {
    /// Interpolated pitch scaled by warmth; not clamped.
    pub pitch: f32,
    /// Interpolated rate scaled by clarity; not clamped.
    pub rate: f32,
    pub label: String,
}

impl BlendOutcome {
    /// Parameters ready for dispatch: clamped, full volume.
    pub fn parameters(&self) -> UtteranceParameters {
        UtteranceParameters::new(self.pitch, self.rate, 1.0).clamped()
    }
}

/// Descriptive label for a blend.
pub fn blend_label(config: &BlendConfig) -> String {
    format!(
        "{}+{}@{}%",
        config.label_a,
        config.label_b,
        config.ratio_percent()
    )
}

/// Interpolate between the two labels' base values, then apply warmth and clarity.
pub fn blend(config: &BlendConfig) -> BlendOutcome {
    if config.needs_sanitizing() {
        warn!(
            ratio = config.ratio,
            warmth = config.warmth,
            clarity = config.clarity,
            "blend settings out of range, clamping"
        );
    }
    let config = config.sanitized();
    let a = base_values(config.label_a);
    let b = base_values(config.label_b);
    let t = config.ratio;

    let pitch = a.pitch * (1.0 - t) + b.pitch * t;
    let rate = a.rate * (1.0 - t) + b.rate * t;

    let outcome = BlendOutcome {
        pitch: pitch * config.warmth,
        rate: rate * config.clarity,
        label: blend_label(&config),
    };
    debug!(label = %outcome.label, pitch = outcome.pitch, rate = outcome.rate, "blended profiles");
    outcome
}
