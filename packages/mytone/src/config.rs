//! Engine configuration and the explicit per-call voice controls.
//!
//! Nothing in the engine reads ambient settings: callers build
//! [`VoiceControls`] (usually from a [`MyToneConfig`] plus user overrides)
//! and pass them in.

use std::path::Path;

use mytone_domain::{BlendConfig, EmotionLabel, Language, VoiceError};
use serde::{Deserialize, Serialize};

/// Default number of history entries kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 40;

/// User-selected voice settings for one speech request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceControls {
    /// Base pitch before emotion modifiers.
    pub tone: f32,
    /// Base speaking rate before emotion modifiers.
    pub rate: f32,
    pub emotion: EmotionLabel,
    pub language: Language,
}

impl VoiceControls {
    pub fn new(tone: f32, rate: f32, emotion: EmotionLabel) -> Self {
        Self {
            tone,
            rate,
            emotion,
            language: Language::default(),
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_emotion(mut self, emotion: EmotionLabel) -> Self {
        self.emotion = emotion;
        self
    }
}

impl Default for VoiceControls {
    fn default() -> Self {
        Self::new(1.0, 1.0, EmotionLabel::Normal)
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MyToneConfig {
    pub controls: VoiceControls,
    pub blend: BlendConfig,
    pub history_capacity: usize,
}

impl Default for MyToneConfig {
    fn default() -> Self {
        Self {
            controls: VoiceControls::default(),
            blend: BlendConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl MyToneConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, VoiceError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| VoiceError::Configuration(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VoiceError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            VoiceError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), VoiceError> {
        let numbers = [
            ("controls.tone", self.controls.tone),
            ("controls.rate", self.controls.rate),
            ("blend.ratio", self.blend.ratio),
            ("blend.warmth", self.blend.warmth),
            ("blend.clarity", self.blend.clarity),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(VoiceError::Configuration(format!(
                "{name} must be a finite number, got: {value}"
            )));
        }
        if self.history_capacity == 0 {
            return Err(VoiceError::Configuration(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
