//! # MyTone Domain
//!
//! Shared domain objects and types for the mytone voice-styling engine.
//!
//! These are plain value types: labels, parameter triples and their ranges,
//! blend settings, similarity results and the unified error. The scoring
//! logic that produces them lives in the `mytone` crate.

pub mod blend_config;
pub mod emotion_label;
pub mod language;
pub mod param_range;
pub mod similarity;
pub mod utterance;
pub mod voice_error;

// Re-export core types
pub use blend_config::{BlendConfig, MIN_BLEND_SCALE};
pub use emotion_label::EmotionLabel;
pub use language::{Language, PREFERRED_LANGUAGES};
pub use param_range::{PITCH_RANGE, ParamRange, RATE_RANGE, VOLUME_RANGE};
pub use similarity::{SimilarityInput, SimilarityScore, SimilarityTier};
pub use utterance::UtteranceParameters;
pub use voice_error::VoiceError;

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        BlendConfig, EmotionLabel, Language, ParamRange, SimilarityInput, SimilarityScore,
        SimilarityTier, UtteranceParameters, VoiceError,
    };
}
