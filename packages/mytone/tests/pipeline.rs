//! End-to-end checks of the scoring and parameter pipeline.
//
//  Text goes through the analyzer, the detected label drives the modifier
//  table, and the composed request reaches a recording speech engine.

use std::cell::RefCell;

use approx::assert_abs_diff_eq;
use mytone::prelude::*;
use mytone::{catalog, tuner};

/* ───────────────────────────── helpers ────────────────────────────── */

#[derive(Default)]
struct RecordingEngine {
    spoken: RefCell<Vec<SpeechRequest>>,
}

impl SpeechEngine for RecordingEngine {
    fn speak(&self, request: &SpeechRequest) -> Result<(), VoiceError> {
        self.spoken.borrow_mut().push(request.clone());
        Ok(())
    }
}

const ALL_LABELS: [EmotionLabel; 11] = EmotionLabel::ALL;

/* ───────────────────────────── classifier ─────────────────────────── */

#[test]
fn blank_text_classifies_as_normal() {
    assert_eq!(classify(""), EmotionLabel::Normal);
    assert_eq!(classify("   "), EmotionLabel::Normal);
}

#[test]
fn happy_text_wins_on_keywords_and_exclamation() {
    assert_eq!(
        classify("I am so happy and excited! great news"),
        EmotionLabel::Happy
    );
}

#[test]
fn equal_happy_and_sad_scores_resolve_to_happy() {
    assert_eq!(classify("happy but sorry today ok fine yes"), EmotionLabel::Happy);
}

/* ───────────────────────────── compositor ─────────────────────────── */

#[test]
fn energetic_modifiers_from_unit_base() {
    let p = apply_modifiers(UtteranceParameters::new(1.0, 1.0, 1.0), EmotionLabel::Energetic);
    assert_abs_diff_eq!(p.pitch, 1.35, epsilon = 1e-5);
    assert_abs_diff_eq!(p.rate, 1.3, epsilon = 1e-5);
    assert_abs_diff_eq!(p.volume, 1.0, epsilon = 1e-5);
}

#[test]
fn unknown_label_string_is_identity() {
    let base = UtteranceParameters::new(1.0, 1.0, 1.0);
    let p = apply_modifiers(base, EmotionLabel::from_name("unknown-label"));
    assert_eq!(p, base);
}

/* ───────────────────────────── blend ──────────────────────────────── */

#[test]
fn happy_sad_midpoint_is_exact_average() {
    let out = blend(&BlendConfig::new(EmotionLabel::Happy, EmotionLabel::Sad, 0.5, 1.0, 1.0));
    assert_abs_diff_eq!(out.pitch, 1.05, epsilon = 1e-5);
    assert_abs_diff_eq!(out.rate, 1.0, epsilon = 1e-5);
}

#[test]
fn blend_endpoints_reproduce_scaled_profiles() {
    for a in ALL_LABELS {
        for b in ALL_LABELS {
            let start = blend(&BlendConfig::new(a, b, 0.0, 1.1, 0.9));
            let end = blend(&BlendConfig::new(a, b, 1.0, 1.1, 0.9));
            let (ba, bb) = (mytone::base_values(a), mytone::base_values(b));
            assert_abs_diff_eq!(start.pitch, ba.pitch * 1.1, epsilon = 1e-5);
            assert_abs_diff_eq!(start.rate, ba.rate * 0.9, epsilon = 1e-5);
            assert_abs_diff_eq!(end.pitch, bb.pitch * 1.1, epsilon = 1e-5);
            assert_abs_diff_eq!(end.rate, bb.rate * 0.9, epsilon = 1e-5);
        }
    }
}

#[test]
fn blend_label_records_both_profiles_and_percentage() {
    let out = blend(&BlendConfig::new(EmotionLabel::Calm, EmotionLabel::Energetic, 0.25, 1.0, 1.0));
    assert_eq!(out.label, "calm+energetic@25%");
}

/* ───────────────────────────── similarity ─────────────────────────── */

#[test]
fn long_bright_happy_text_scores_73() {
    let s = score(&SimilarityInput::new("x".repeat(160), 1.3, EmotionLabel::Happy));
    assert_eq!(s.value, 73);
    assert_eq!(s.tier, SimilarityTier::Good);
}

#[test]
fn empty_text_scores_zero() {
    let s = score(&SimilarityInput::new("", 1.0, EmotionLabel::Normal));
    assert_eq!(s.value, 0);
    assert_eq!(s.tier, SimilarityTier::Weak);
}

#[test]
fn similarity_stays_within_bounds() {
    let (forty, long) = ("y".repeat(40), "z".repeat(151));
    let texts: [&str; 4] = ["", "hi", &forty, &long];
    let tones = [-3.0, 0.0, 0.89, 0.9, 1.0, 1.2, 1.21, 7.0];
    for text in texts {
        for tone in tones {
            for emotion in ALL_LABELS {
                let s = score(&SimilarityInput::new(text, tone, emotion));
                assert!(s.value <= 100, "{text:?} {tone} {emotion}: {}", s.value);
                assert_eq!(s.tier, SimilarityTier::from_value(s.value));
            }
        }
    }
}

#[test]
fn similarity_thresholds_are_exclusive() {
    let neutral = |text: String, tone: f32| score(&SimilarityInput::new(text, tone, EmotionLabel::Normal)).value;
    assert_eq!(neutral("x".repeat(150), 1.0), 50);
    assert_eq!(neutral("x".repeat(40), 1.0), 50);
    assert_eq!(neutral("x".repeat(100), 1.2), 50);
    assert_eq!(neutral("x".repeat(100), 0.9), 50);
    assert_eq!(neutral("x".repeat(151), 1.21), 68);
    assert_eq!(neutral("x".repeat(39), 0.89), 34);
}

/* ───────────────────────────── speech boundary ────────────────────── */

#[test]
fn composed_parameters_always_land_in_range() {
    let extremes = [-1.0, 0.0, 0.1, 0.5, 1.0, 1.9, 2.0, 9.0];
    for tone in extremes {
        for rate in extremes {
            for emotion in ALL_LABELS {
                let req = compose_request("range check", &VoiceControls::new(tone, rate, emotion))
                    .unwrap();
                assert!(
                    req.parameters().is_in_range(),
                    "tone={tone} rate={rate} emotion={emotion} -> {:?}",
                    req.parameters()
                );
            }
        }
    }
}

#[test]
fn blended_parameters_always_land_in_range() {
    for a in ALL_LABELS {
        for b in ALL_LABELS {
            for (warmth, clarity) in [(0.0, 0.0), (1.0, 1.0), (5.0, 5.0)] {
                let cfg = BlendConfig::new(a, b, 0.5, warmth, clarity);
                assert!(blend(&cfg).parameters().is_in_range());
                let req = compose_blend_request("range check", &cfg, Language::default()).unwrap();
                assert!(req.parameters().is_in_range());
            }
        }
    }
}

#[test]
fn detected_label_drives_the_spoken_request() {
    let engine = RecordingEngine::default();
    let text = "Once upon a time, in a quiet village, the story began.";
    let detected = classify(text);
    assert_eq!(detected, EmotionLabel::Storytelling);

    let controls = VoiceControls::default().with_emotion(detected);
    let request = compose_request(text, &controls).unwrap();
    speak(&engine, &request).unwrap();

    let spoken = engine.spoken.borrow();
    assert_eq!(spoken.len(), 1);
    assert_abs_diff_eq!(spoken[0].pitch, 1.05, epsilon = 1e-5);
    assert_abs_diff_eq!(spoken[0].rate, 0.93, epsilon = 1e-5);
    assert_abs_diff_eq!(spoken[0].volume, 0.98, epsilon = 1e-5);
}

#[test]
fn auto_voice_card_feeds_the_scorer() {
    let setting = catalog::auto_voice("energetic-host").unwrap();
    let text = catalog::template("product").unwrap();
    let s = score(&SimilarityInput::new(text, setting.tone, setting.emotion));
    // 95 characters, bright tone, energetic
    assert_eq!(s.value, 50 + 8 + 5);
}

#[test]
fn tuner_output_is_a_valid_tone_and_rate() {
    let point = tuner::tune(120.0, 40.0, 240.0, 160.0);
    let req = compose_request("tuned", &VoiceControls::new(point.tone, point.rate, EmotionLabel::Normal))
        .unwrap();
    assert_abs_diff_eq!(req.pitch, 1.05, epsilon = 1e-5);
    assert_abs_diff_eq!(req.rate, 1.175, epsilon = 1e-5);
}
