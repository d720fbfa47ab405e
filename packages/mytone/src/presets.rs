//! Named voice presets and blend presets.

use mytone_domain::{EmotionLabel, Language, VoiceError};
use serde::{Deserialize, Serialize};

use crate::blend::BlendOutcome;
use crate::config::VoiceControls;

/// Saved tone/rate/emotion selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub tone: f32,
    /// Display text of the tone option, e.g. "Medium".
    pub tone_label: String,
    pub emotion: EmotionLabel,
    pub rate: f32,
    pub created_ms: u64,
}

impl Preset {
    pub fn controls(&self, language: Language) -> VoiceControls {
        VoiceControls::new(self.tone, self.rate, self.emotion).with_language(language)
    }
}

/// Saved blend result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlendPreset {
    pub name: String,
    pub pitch: f32,
    pub rate: f32,
    /// Blend label such as `happy+calm@30%`.
    pub label: String,
    pub created_ms: u64,
}

/// In-memory preset collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetBook {
    #[serde(default)]
    presets: Vec<Preset>,
    #[serde(default)]
    blends: Vec<BlendPreset>,
}

impl PresetBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_preset(
        &mut self,
        name: &str,
        controls: &VoiceControls,
        tone_label: impl Into<String>,
        created_ms: u64,
    ) -> Result<&Preset, VoiceError> {
        let name = checked_name(name)?;
        self.presets.push(Preset {
            name,
            tone: controls.tone,
            tone_label: tone_label.into(),
            emotion: controls.emotion,
            rate: controls.rate,
            created_ms,
        });
        Ok(&self.presets[self.presets.len() - 1])
    }

    pub fn preset(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn remove_preset(&mut self, index: usize) -> Result<Preset, VoiceError> {
        if index >= self.presets.len() {
            return Err(out_of_range("preset", index, self.presets.len()));
        }
        Ok(self.presets.remove(index))
    }

    pub fn add_blend(
        &mut self,
        name: &str,
        outcome: &BlendOutcome,
        created_ms: u64,
    ) -> Result<&BlendPreset, VoiceError> {
        let name = checked_name(name)?;
        self.blends.push(BlendPreset {
            name,
            pitch: outcome.pitch,
            rate: outcome.rate,
            label: outcome.label.clone(),
            created_ms,
        });
        Ok(&self.blends[self.blends.len() - 1])
    }

    pub fn blend(&self, index: usize) -> Option<&BlendPreset> {
        self.blends.get(index)
    }

    pub fn blends(&self) -> &[BlendPreset] {
        &self.blends
    }

    pub fn remove_blend(&mut self, index: usize) -> Result<BlendPreset, VoiceError> {
        if index >= self.blends.len() {
            return Err(out_of_range("blend preset", index, self.blends.len()));
        }
        Ok(self.blends.remove(index))
    }

    pub fn to_json(&self) -> Result<String, VoiceError> {
        serde_json::to_string(self).map_err(|e| VoiceError::Serialization(format!("presets: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, VoiceError> {
        serde_json::from_str(json).map_err(|e| VoiceError::Serialization(format!("presets: {e}")))
    }
}

fn checked_name(name: &str) -> Result<String, VoiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(VoiceError::Preset("preset name is empty".to_string()));
    }
    Ok(name.to_string())
}

fn out_of_range(kind: &str, index: usize, len: usize) -> VoiceError {
    VoiceError::Preset(format!("no {kind} at index {index} (have {len})"))
}
