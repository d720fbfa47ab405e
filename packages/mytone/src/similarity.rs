//! Heuristic style-similarity scorer.

use mytone_domain::{EmotionLabel, SimilarityInput, SimilarityScore};
use tracing::debug;

const BASE_SCORE: i32 = 50;

/// Texts longer than this read clearly enough for a bonus.
const LONG_TEXT_CHARS: usize = 150;
/// Texts shorter than this are penalised.
const SHORT_TEXT_CHARS: usize = 40;

const BRIGHT_TONE: f32 = 1.2;
const DULL_TONE: f32 = 0.9;

/// Score how well `input` fits a confident, expressive style.
///
/// Empty text scores 0. Length is counted in UTF-16 code units, so a
/// character outside the Basic Multilingual Plane counts twice.
pub fn score(input: &SimilarityInput) -> SimilarityScore {
    if input.text.is_empty() {
        return SimilarityScore::new(0);
    }

    let mut value = BASE_SCORE;

    let len = input.text.encode_utf16().count();
    if len > LONG_TEXT_CHARS {
        value += 10;
    }
    if len < SHORT_TEXT_CHARS {
        value -= 10;
    }

    if input.tone > BRIGHT_TONE {
        value += 8;
    }
    if input.tone < DULL_TONE {
        value -= 6;
    }

    match input.emotion {
        EmotionLabel::Friendly | EmotionLabel::Happy | EmotionLabel::Energetic => value += 5,
        EmotionLabel::Sad | EmotionLabel::Soft => value -= 2,
        _ => {}
    }

    let score = SimilarityScore::new(value.clamp(0, 100) as u8);
    debug!(value = score.value, tier = %score.tier, "scored similarity");
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use mytone_domain::SimilarityTier;

    #[test]
    fn long_bright_happy_text_is_good() {
        let text = "a".repeat(160);
        let s = score(&SimilarityInput::new(text, 1.3, EmotionLabel::Happy));
        assert_eq!(s.value, 73);
        assert_eq!(s.tier, SimilarityTier::Good);
    }

    #[test]
    fn empty_text_is_zero_and_weak() {
        let s = score(&SimilarityInput::new("", 1.0, EmotionLabel::Normal));
        assert_eq!(s.value, 0);
        assert_eq!(s.tier, SimilarityTier::Weak);
    }

    #[test]
    fn short_dull_soft_text_is_penalised() {
        let s = score(&SimilarityInput::new("hello there", 0.8, EmotionLabel::Soft));
        assert_eq!(s.value, 50 - 10 - 6 - 2);
        assert_eq!(s.tier, SimilarityTier::Weak);
    }

    #[test]
    fn medium_text_at_neutral_tone_stays_at_base() {
        let text = "b".repeat(100);
        let s = score(&SimilarityInput::new(text, 1.0, EmotionLabel::Calm));
        assert_eq!(s.value, 50);
    }

    #[test]
    fn length_counts_utf16_units_not_bytes() {
        // 39 two-byte characters, one unit each: still short
        let text = "é".repeat(39);
        let s = score(&SimilarityInput::new(text, 1.0, EmotionLabel::Normal));
        assert_eq!(s.value, 40);
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        let s = score(&SimilarityInput::new("😀".repeat(20), 1.0, EmotionLabel::Normal));
        assert_eq!(s.value, 50);
        let s = score(&SimilarityInput::new("😀".repeat(19), 1.0, EmotionLabel::Normal));
        assert_eq!(s.value, 40);
    }

    #[test]
    fn length_thresholds_are_strict() {
        let at = |n: usize| score(&SimilarityInput::new("a".repeat(n), 1.0, EmotionLabel::Normal)).value;
        assert_eq!(at(39), 40);
        assert_eq!(at(40), 50);
        assert_eq!(at(150), 50);
        assert_eq!(at(151), 60);
    }

    #[test]
    fn tone_thresholds_are_strict() {
        let at = |tone: f32| score(&SimilarityInput::new("a".repeat(100), tone, EmotionLabel::Normal)).value;
        assert_eq!(at(1.2), 50);
        assert_eq!(at(1.21), 58);
        assert_eq!(at(0.9), 50);
        assert_eq!(at(0.89), 44);
    }

    #[test]
    fn non_finite_tone_is_ignored() {
        let text = "c".repeat(100);
        let s = score(&SimilarityInput::new(text, f32::NAN, EmotionLabel::Normal));
        assert_eq!(s.value, 50);
    }
}
