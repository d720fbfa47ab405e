//! Rule-based emotion classifier.
//!
//! Text is scored against fixed keyword lists plus a few punctuation and
//! length cues. Keyword matching is substring-based on the lower-cased
//! text, so `"made"` counts for `mad`; each keyword contributes at most once
//! no matter how often it occurs.

use mytone_domain::EmotionLabel;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::debug;

/// Points added per matching keyword.
const KEYWORD_WEIGHT: f32 = 2.0;
/// Bonus for `!` (happy) and `?` (question).
const PUNCTUATION_BONUS: f32 = 1.0;
/// Bonus for storytelling when the text is long.
const LONG_TEXT_BONUS: f32 = 1.0;
/// Bonus for professional when the text is short.
const SHORT_TEXT_BONUS: f32 = 0.8;
/// More tokens than this counts as long.
const LONG_TEXT_TOKENS: usize = 200;
/// Fewer tokens than this counts as short.
const SHORT_TEXT_TOKENS: usize = 6;

/// Categories the classifier accumulates scores for.
///
/// Declaration order is the tie-break order: on equal scores the earlier
/// category wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Happy,
    Sad,
    Angry,
    Professional,
    Soft,
    Storytelling,
    Question,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 7] = [
        ScoreCategory::Happy,
        ScoreCategory::Sad,
        ScoreCategory::Angry,
        ScoreCategory::Professional,
        ScoreCategory::Soft,
        ScoreCategory::Storytelling,
        ScoreCategory::Question,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ScoreCategory::Happy => "happy",
            ScoreCategory::Sad => "sad",
            ScoreCategory::Angry => "angry",
            ScoreCategory::Professional => "professional",
            ScoreCategory::Soft => "soft",
            ScoreCategory::Storytelling => "storytelling",
            ScoreCategory::Question => "question",
        }
    }

    /// Keyword list for the category. `Question` is punctuation-only.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            ScoreCategory::Happy => &[
                "happy", "joy", "awesome", "great", "love", "yay", "congrats", "amazing",
                "cheerful", "smile", "excited",
            ],
            ScoreCategory::Sad => &[
                "sad", "sorry", "unhappy", "depressed", "miss", "regret", "lonely", "tear", "cry",
            ],
            ScoreCategory::Angry => &["angry", "hate", "annoyed", "furious", "mad", "rage", "insult"],
            ScoreCategory::Professional => &[
                "dear", "regards", "sincerely", "please find", "attached", "proposal", "meeting",
                "agenda",
            ],
            ScoreCategory::Soft => &["soft", "gentle", "kindly", "please", "calm", "soothing"],
            ScoreCategory::Storytelling => {
                &["once", "long ago", "chapter", "story", "characters", "journey"]
            }
            ScoreCategory::Question => &[],
        }
    }

    /// Label reported when this category wins.
    pub const fn label(&self) -> EmotionLabel {
        match self {
            ScoreCategory::Happy => EmotionLabel::Happy,
            ScoreCategory::Sad => EmotionLabel::Sad,
            ScoreCategory::Angry => EmotionLabel::Angry,
            ScoreCategory::Professional => EmotionLabel::Professional,
            ScoreCategory::Soft => EmotionLabel::Soft,
            ScoreCategory::Storytelling => EmotionLabel::Storytelling,
            ScoreCategory::Question => EmotionLabel::Questioning,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Accumulated per-category scores for a single classification.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreVector {
    scores: [f32; ScoreCategory::ALL.len()],
}

impl ScoreVector {
    pub fn get(&self, category: ScoreCategory) -> f32 {
        self.scores[category.index()]
    }

    fn add(&mut self, category: ScoreCategory, amount: f32) {
        self.scores[category.index()] += amount;
    }

    /// Scores in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (ScoreCategory, f32)> + '_ {
        ScoreCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Highest-scoring category, or `None` when nothing scored.
    ///
    /// Only a strictly greater score displaces the running winner.
    pub fn winner(&self) -> Option<(ScoreCategory, f32)> {
        let mut best: Option<(ScoreCategory, f32)> = None;
        let mut max = 0.0f32;
        for (category, score) in self.iter() {
            if score > max {
                max = score;
                best = Some((category, score));
            }
        }
        best
    }
}

impl Serialize for ScoreVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.scores.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.as_str(), &score)?;
        }
        map.end()
    }
}

/// Classification result together with the scores that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Analysis {
    pub label: EmotionLabel,
    pub scores: ScoreVector,
}

/// Number of pieces `text` splits into at whitespace runs.
///
/// A leading or trailing run still delimits an empty piece, so `"a b "`
/// counts as three tokens.
fn token_count(text: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for c in text.chars() {
        let ws = c.is_whitespace();
        if ws && !in_run {
            runs += 1;
        }
        in_run = ws;
    }
    runs + 1
}

/// Score `text` and pick its label.
pub fn analyze(text: &str) -> Analysis {
    if text.trim().is_empty() {
        return Analysis {
            label: EmotionLabel::Normal,
            scores: ScoreVector::default(),
        };
    }

    let lowered = text.to_lowercase();
    let tokens = token_count(&lowered);
    let mut scores = ScoreVector::default();

    for category in ScoreCategory::ALL {
        for keyword in category.keywords() {
            if lowered.contains(keyword) {
                scores.add(category, KEYWORD_WEIGHT);
            }
        }
    }

    if lowered.contains('!') {
        scores.add(ScoreCategory::Happy, PUNCTUATION_BONUS);
    }
    if lowered.contains('?') {
        scores.add(ScoreCategory::Question, PUNCTUATION_BONUS);
    }
    if tokens > LONG_TEXT_TOKENS {
        scores.add(ScoreCategory::Storytelling, LONG_TEXT_BONUS);
    }
    if tokens < SHORT_TEXT_TOKENS {
        scores.add(ScoreCategory::Professional, SHORT_TEXT_BONUS);
    }

    let label = scores
        .winner()
        .map(|(category, _)| category.label())
        .unwrap_or_default();
    debug!(%label, tokens, ?scores, "classified text");

    Analysis { label, scores }
}

/// Classify `text` into a single emotion label.
///
/// Empty or whitespace-only text is `Normal`.
pub fn classify(text: &str) -> EmotionLabel {
    analyze(text).label
}
