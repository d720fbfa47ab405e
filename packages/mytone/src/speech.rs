//! Speech-engine boundary.
//!
//! The engine never produces audio itself. It composes a finalized
//! [`SpeechRequest`] and hands it to an injected [`SpeechEngine`].

use mytone_domain::{
    BlendConfig, EmotionLabel, Language, PITCH_RANGE, PREFERRED_LANGUAGES, RATE_RANGE,
    UtteranceParameters, VoiceError,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::blend::blend;
use crate::config::VoiceControls;
use crate::modifiers::apply_modifiers;

/// Characters spoken by the short preview.
pub const PREVIEW_CHARS: usize = 120;

/// Finalized request for a speech-synthesis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub text: String,
    pub pitch: f32,
    pub rate: f32,
    pub volume: f32,
    pub language: Language,
    /// Name of a specific installed voice, if one was selected.
    pub voice: Option<String>,
}

impl SpeechRequest {
    pub fn parameters(&self) -> UtteranceParameters {
        UtteranceParameters::new(self.pitch, self.rate, self.volume)
    }

    /// Pin the request to a named voice.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

/// Capability that renders a [`SpeechRequest`] as audio.
pub trait SpeechEngine {
    /// Start speaking `request`. Backend failures come back as
    /// [`VoiceError::Synthesis`].
    fn speak(&self, request: &SpeechRequest) -> Result<(), VoiceError>;

    /// Stop whatever is currently being spoken.
    fn cancel(&self) {}
}

/// Engine that only logs what it would have spoken.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSpeechEngine;

impl SpeechEngine for LogSpeechEngine {
    fn speak(&self, request: &SpeechRequest) -> Result<(), VoiceError> {
        info!(
            language = %request.language,
            voice = request.voice.as_deref().unwrap_or("default"),
            pitch = request.pitch,
            rate = request.rate,
            volume = request.volume,
            chars = request.text.chars().count(),
            "speak"
        );
        Ok(())
    }
}

/// Build the request for speaking `text` with `controls`.
///
/// Tone and rate are clamped to the global ranges, the emotion's modifiers
/// are applied on top, and the final triple is clamped again. Blank text is
/// rejected.
pub fn compose_request(text: &str, controls: &VoiceControls) -> Result<SpeechRequest, VoiceError> {
    if text.trim().is_empty() {
        return Err(VoiceError::NotSynthesizable(
            "please enter text to speak".to_string(),
        ));
    }

    let tone = finite_or_unit(controls.tone);
    let rate = finite_or_unit(controls.rate);
    if !PITCH_RANGE.contains(tone) || !RATE_RANGE.contains(rate) {
        warn!(tone, rate, "voice controls out of range, clamping");
    }

    let base = UtteranceParameters::new(PITCH_RANGE.clamp(tone), RATE_RANGE.clamp(rate), 1.0);
    let params = apply_modifiers(base, controls.emotion).clamped();

    Ok(SpeechRequest {
        text: text.to_string(),
        pitch: params.pitch,
        rate: params.rate,
        volume: params.volume,
        language: controls.language.clone(),
        voice: None,
    })
}

/// Build the request for auditioning a blend.
///
/// The blended pitch and rate become the base tone and rate; the emotion is
/// `normal` since the blend already carries the style.
pub fn compose_blend_request(
    text: &str,
    config: &BlendConfig,
    language: Language,
) -> Result<SpeechRequest, VoiceError> {
    let outcome = blend(config);
    let controls = VoiceControls::new(outcome.pitch, outcome.rate, EmotionLabel::Normal)
        .with_language(language);
    compose_request(text, &controls)
}

/// Cancel current speech and dispatch `request` to `engine`.
pub fn speak<E: SpeechEngine + ?Sized>(
    engine: &E,
    request: &SpeechRequest,
) -> Result<(), VoiceError> {
    engine.cancel();
    engine.speak(request).inspect_err(|e| warn!("speech failed: {e}"))
}

/// Leading slice of `text` used for the short preview.
pub fn preview_text(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// An installed voice as reported by the speech backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub language: Language,
}

impl VoiceInfo {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: Language::new(language),
        }
    }
}

/// Pick the voice best matching `language`.
///
/// Exact tag first, then same primary subtag, then any English voice, then
/// whatever comes first.
pub fn select_voice<'a>(voices: &'a [VoiceInfo], language: &Language) -> Option<&'a VoiceInfo> {
    let primary = language.primary().to_ascii_lowercase();
    voices
        .iter()
        .find(|v| v.language.matches(language.code()))
        .or_else(|| {
            voices
                .iter()
                .find(|v| v.language.code().to_ascii_lowercase().starts_with(&primary))
        })
        .or_else(|| voices.iter().find(|v| v.language.code().contains("en")))
        .or_else(|| voices.first())
}

/// Default language for the installed `voices`.
pub fn preferred_language(voices: &[VoiceInfo]) -> Language {
    PREFERRED_LANGUAGES
        .iter()
        .find(|code| voices.iter().any(|v| v.language.matches(code)))
        .map(|code| Language::new(*code))
        .or_else(|| voices.first().map(|v| v.language.clone()))
        .unwrap_or_default()
}

fn finite_or_unit(value: f32) -> f32 {
    if value.is_finite() { value } else { 1.0 }
}
