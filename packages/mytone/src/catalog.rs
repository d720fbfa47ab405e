//! Built-in voice cards, auto-voice styles and text templates.

use mytone_domain::{EmotionLabel, Language};
use serde::Serialize;

use crate::config::VoiceControls;

/// Stored tone/rate/emotion combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoiceSetting {
    pub tone: f32,
    pub rate: f32,
    pub emotion: EmotionLabel,
}

impl VoiceSetting {
    const fn new(tone: f32, rate: f32, emotion: EmotionLabel) -> Self {
        Self {
            tone,
            rate,
            emotion,
        }
    }

    /// Controls for speaking with this setting in `language`.
    pub fn controls(&self, language: Language) -> VoiceControls {
        VoiceControls::new(self.tone, self.rate, self.emotion).with_language(language)
    }
}

/// Voice cards shown on the landing page.
pub const VOICE_CARDS: [(&str, VoiceSetting); 3] = [
    ("mytone-male", VoiceSetting::new(0.8, 0.95, EmotionLabel::Normal)),
    ("mytone-female", VoiceSetting::new(1.3, 1.05, EmotionLabel::Friendly)),
    ("mytone-neutral", VoiceSetting::new(1.0, 1.0, EmotionLabel::Normal)),
];

/// One-click style generator presets.
pub const AUTO_VOICES: [(&str, VoiceSetting); 5] = [
    ("deep-male", VoiceSetting::new(0.85, 0.9, EmotionLabel::Professional)),
    ("clear-female", VoiceSetting::new(1.20, 1.05, EmotionLabel::Friendly)),
    ("energetic-host", VoiceSetting::new(1.30, 1.2, EmotionLabel::Energetic)),
    ("narrator", VoiceSetting::new(1.05, 0.95, EmotionLabel::Storytelling)),
    ("calm-assistant", VoiceSetting::new(0.95, 0.92, EmotionLabel::Calm)),
];

/// Sample scripts.
pub const TEMPLATES: [(&str, &str); 4] = [
    (
        "podcast",
        "Welcome back to the show. I'm your host, and today we have a fantastic topic. Let's dive in!",
    ),
    (
        "narration",
        "Once upon a time, in a quiet village, there lived a storyteller who could make the sun listen.",
    ),
    (
        "product",
        "Introducing our new product, engineered for speed, built for reliability, and designed for you.",
    ),
    (
        "presentation",
        "Good morning everyone. Thank you for joining. Today I'm excited to share our progress.",
    ),
];

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| *value)
}

pub fn voice_card(key: &str) -> Option<VoiceSetting> {
    lookup(&VOICE_CARDS, key)
}

/// Short display name of a voice card, e.g. `female` for `mytone-female`.
pub fn voice_card_name(key: &str) -> &str {
    key.strip_prefix("mytone-").unwrap_or(key)
}

pub fn auto_voice(key: &str) -> Option<VoiceSetting> {
    lookup(&AUTO_VOICES, key)
}

pub fn template(key: &str) -> Option<&'static str> {
    lookup(&TEMPLATES, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::classify;

    #[test]
    fn lookups_find_known_keys() {
        assert_eq!(voice_card("mytone-female").unwrap().emotion, EmotionLabel::Friendly);
        assert_eq!(auto_voice("narrator").unwrap().tone, 1.05);
        assert!(template("podcast").unwrap().starts_with("Welcome back"));
    }

    #[test]
    fn unknown_keys_are_none() {
        assert!(voice_card("mytone-robot").is_none());
        assert!(auto_voice("").is_none());
        assert!(template("sermon").is_none());
    }

    #[test]
    fn card_names_drop_the_prefix() {
        assert_eq!(voice_card_name("mytone-male"), "male");
        assert_eq!(voice_card_name("custom"), "custom");
    }

    #[test]
    fn narration_template_reads_as_storytelling() {
        assert_eq!(classify(template("narration").unwrap()), EmotionLabel::Storytelling);
    }

    #[test]
    fn setting_converts_to_controls() {
        let controls = auto_voice("calm-assistant").unwrap().controls(Language::new("en-IN"));
        assert_eq!(controls.emotion, EmotionLabel::Calm);
        assert_eq!(controls.rate, 0.92);
        assert_eq!(controls.language.code(), "en-IN");
    }
}
