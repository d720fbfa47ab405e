//! # MyTone
//!
//! Rule-based voice styling: classify free-form text into an emotion label,
//! turn labels into pitch/rate/volume for a speech engine, blend two
//! emotion profiles, and score how well a text and configuration fit a
//! style.
//!
//! Every scoring function is pure and synchronous. Configuration is passed
//! in explicitly; audio rendering is delegated to a [`speech::SpeechEngine`].

pub mod analyzer;
pub mod blend;
pub mod catalog;
pub mod config;
pub mod history;
pub mod modifiers;
pub mod presets;
pub mod profile;
pub mod similarity;
pub mod speech;
pub mod tuner;

pub use analyzer::{Analysis, ScoreCategory, ScoreVector, analyze, classify};
pub use blend::{BaseValues, BlendOutcome, base_values, blend};
pub use config::{MyToneConfig, VoiceControls};
pub use modifiers::{EmotionModifier, VolumeRule, apply_modifiers, modifier_for};
pub use similarity::score;
pub use speech::{
    LogSpeechEngine, SpeechEngine, SpeechRequest, VoiceInfo, compose_blend_request,
    compose_request, speak,
};

pub use mytone_domain::{
    BlendConfig, EmotionLabel, Language, SimilarityInput, SimilarityScore, SimilarityTier,
    UtteranceParameters, VoiceError,
};

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        BlendConfig, BlendOutcome, EmotionLabel, Language, MyToneConfig, SimilarityInput,
        SimilarityScore, SimilarityTier, SpeechEngine, SpeechRequest, UtteranceParameters,
        VoiceControls, VoiceError, analyze, apply_modifiers, blend, classify,
        compose_blend_request, compose_request, score, speak,
    };
}
