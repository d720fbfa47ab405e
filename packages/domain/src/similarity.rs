//! Style-similarity inputs and results.
//!
//! The score is a display heuristic estimating how well a text and voice
//! configuration fit a desired style. It is not an acoustic metric.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::EmotionLabel;

/// Text plus the voice configuration it would be spoken with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityInput {
    pub text: String,
    /// Base pitch ("tone") the user selected.
    pub tone: f32,
    pub emotion: EmotionLabel,
}

impl SimilarityInput {
    pub fn new(text: impl Into<String>, tone: f32, emotion: EmotionLabel) -> Self {
        Self {
            text: text.into(),
            tone,
            emotion,
        }
    }
}

/// Coarse quality band for a similarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityTier {
    Great,
    Good,
    Weak,
}

impl SimilarityTier {
    /// Band for a value in 0..=100: above 80 is great, above 60 good.
    pub fn from_value(value: u8) -> Self {
        if value > 80 {
            SimilarityTier::Great
        } else if value > 60 {
            SimilarityTier::Good
        } else {
            SimilarityTier::Weak
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            SimilarityTier::Great => "great",
            SimilarityTier::Good => "good",
            SimilarityTier::Weak => "weak",
        }
    }

    /// Advice line shown under the score.
    pub const fn tip(&self) -> &'static str {
        match self {
            SimilarityTier::Great => "Great match, strong style!",
            SimilarityTier::Good => "Good match, keep refining.",
            SimilarityTier::Weak => "Weak match, adjust tone & speed.",
        }
    }
}

impl fmt::Display for SimilarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integral similarity value in 0..=100 with its tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub value: u8,
    pub tier: SimilarityTier,
}

impl SimilarityScore {
    /// Build a score from a value, capping it at 100.
    pub fn new(value: u8) -> Self {
        let value = value.min(100);
        Self {
            value,
            tier: SimilarityTier::from_value(value),
        }
    }
}
