//! Voice profile export.

use chrono::{DateTime, Utc};
use mytone_domain::{EmotionLabel, VoiceError};
use serde::{Deserialize, Serialize};

use crate::config::VoiceControls;

pub const PROFILE_VERSION: &str = "M0.9";

/// Suggested file name for an exported profile.
pub const PROFILE_FILE_NAME: &str = "mytone_voice_profile.json";

/// Snapshot of the current voice settings for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceProfile {
    pub version: String,
    pub tone: f32,
    pub rate: f32,
    pub emotion: EmotionLabel,
    pub sample_uploaded: bool,
    pub created: DateTime<Utc>,
}

impl VoiceProfile {
    pub fn new(controls: &VoiceControls, sample_uploaded: bool, created: DateTime<Utc>) -> Self {
        Self {
            version: PROFILE_VERSION.to_string(),
            tone: controls.tone,
            rate: controls.rate,
            emotion: controls.emotion,
            sample_uploaded,
            created,
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> Result<String, VoiceError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VoiceError::Serialization(format!("voice profile: {e}")))
    }

    pub fn from_json(json: &str) -> Result<Self, VoiceError> {
        serde_json::from_str(json)
            .map_err(|e| VoiceError::Serialization(format!("voice profile: {e}")))
    }
}
