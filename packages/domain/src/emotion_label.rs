//! Discrete expressive-style labels.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::VoiceError;

/// Expressive style tag attached to a piece of text or a voice setting.
///
/// `Normal` is the no-signal default. Labels arriving as free-form strings
/// from the host UI go through [`EmotionLabel::from_name`], which never
/// fails: anything unrecognised becomes `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionLabel {
    Happy,
    Sad,
    Angry,
    Professional,
    Soft,
    Storytelling,
    Questioning,
    Friendly,
    Energetic,
    Calm,
    #[default]
    Normal,
}

impl EmotionLabel {
    /// Every label, in declaration order.
    pub const ALL: [EmotionLabel; 11] = [
        EmotionLabel::Happy,
        EmotionLabel::Sad,
        EmotionLabel::Angry,
        EmotionLabel::Professional,
        EmotionLabel::Soft,
        EmotionLabel::Storytelling,
        EmotionLabel::Questioning,
        EmotionLabel::Friendly,
        EmotionLabel::Energetic,
        EmotionLabel::Calm,
        EmotionLabel::Normal,
    ];

    /// Lower-case wire name of the label.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "happy",
            EmotionLabel::Sad => "sad",
            EmotionLabel::Angry => "angry",
            EmotionLabel::Professional => "professional",
            EmotionLabel::Soft => "soft",
            EmotionLabel::Storytelling => "storytelling",
            EmotionLabel::Questioning => "questioning",
            EmotionLabel::Friendly => "friendly",
            EmotionLabel::Energetic => "energetic",
            EmotionLabel::Calm => "calm",
            EmotionLabel::Normal => "normal",
        }
    }

    /// Look a label up by name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(name))
    }

    /// Lenient lookup: unknown names resolve to `Normal`.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Human-facing badge used next to analyzer output.
    pub const fn pretty(&self) -> &'static str {
        match self {
            EmotionLabel::Happy => "😊 Happy",
            EmotionLabel::Sad => "😢 Sad",
            EmotionLabel::Angry => "😠 Angry",
            EmotionLabel::Professional => "💼 Professional",
            EmotionLabel::Soft => "🌬️ Soft",
            EmotionLabel::Storytelling => "📖 Storytelling",
            EmotionLabel::Questioning => "❓ Questioning",
            _ => "—",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing for configuration files and command-line flags.
impl FromStr for EmotionLabel {
    type Err = VoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| VoiceError::Configuration(format!("unknown emotion label: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_parse() {
        for label in EmotionLabel::ALL {
            assert_eq!(EmotionLabel::parse(label.as_str()), Some(label));
        }
        assert_eq!(EmotionLabel::parse("  HAPPY "), Some(EmotionLabel::Happy));
    }

    #[test]
    fn unknown_names_fall_back_to_normal() {
        assert_eq!(EmotionLabel::from_name("unknown-label"), EmotionLabel::Normal);
        assert_eq!(EmotionLabel::from_name(""), EmotionLabel::Normal);
        assert!("whispery".parse::<EmotionLabel>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&EmotionLabel::Storytelling).unwrap();
        assert_eq!(json, "\"storytelling\"");
        let back: EmotionLabel = serde_json::from_str("\"calm\"").unwrap();
        assert_eq!(back, EmotionLabel::Calm);
    }

    #[test]
    fn pretty_has_a_placeholder_for_unbadged_labels() {
        assert_eq!(EmotionLabel::Questioning.pretty(), "❓ Questioning");
        assert_eq!(EmotionLabel::Normal.pretty(), "—");
        assert_eq!(EmotionLabel::Energetic.pretty(), "—");
    }
}
