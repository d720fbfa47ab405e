//! Unified error for the mytone engine.
use thiserror::Error;

/// Top-level error for the fallible edges around the scoring core.
///
/// Classification, modifier composition, blending and similarity scoring
/// are total and never produce one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VoiceError {
    /// Configuration-related failure reason.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Error when synthesis is not possible
    #[error("not synthesizable: {0}")]
    NotSynthesizable(String),
    /// Failure reported by the speech engine
    #[error("synthesis: {0}")]
    Synthesis(String),
    /// Encoding or decoding of exported records failed.
    #[error("serialization: {0}")]
    Serialization(String),
    /// Preset lookup or bookkeeping failure.
    #[error("preset: {0}")]
    Preset(String),
}
