//! Bounded, newest-first record of spoken requests.
//!
//! Storage is the caller's business; [`History::to_json`] and
//! [`History::from_json`] move it in and out of whatever store they use.

use std::collections::VecDeque;

use mytone_domain::{EmotionLabel, Language, VoiceError};
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_HISTORY_CAPACITY, VoiceControls};

/// One spoken request.
///
/// `tone` and `rate` are the controls as selected, before emotion modifiers,
/// so replaying an entry reproduces the original request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    pub tone: f32,
    pub rate: f32,
    pub emotion: EmotionLabel,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp_ms: u64,
}

impl HistoryEntry {
    pub fn new(text: impl Into<String>, controls: &VoiceControls, timestamp_ms: u64) -> Self {
        Self {
            text: text.into(),
            tone: controls.tone,
            rate: controls.rate,
            emotion: controls.emotion,
            timestamp_ms,
        }
    }

    /// Controls for replaying this entry.
    pub fn replay_controls(&self, language: Language) -> VoiceControls {
        VoiceControls::new(self.tone, self.rate, self.emotion).with_language(language)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    /// Empty history keeping at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add `entry` as the newest item, dropping the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entry at `index`, 0 being the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries as a JSON array, newest first.
    pub fn to_json(&self) -> Result<String, VoiceError> {
        serde_json::to_string(&self.entries)
            .map_err(|e| VoiceError::Serialization(format!("history: {e}")))
    }

    /// Restore from a JSON array, keeping only the newest `capacity` entries.
    pub fn from_json(json: &str, capacity: usize) -> Result<Self, VoiceError> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)
            .map_err(|e| VoiceError::Serialization(format!("history: {e}")))?;
        let mut history = Self::new(capacity);
        history.entries.extend(entries.into_iter().take(history.capacity));
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, ts: u64) -> HistoryEntry {
        HistoryEntry::new(text, &VoiceControls::default(), ts)
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::default();
        history.push(entry("first", 1));
        history.push(entry("second", 2));
        assert_eq!(history.get(0).unwrap().text, "second");
        assert_eq!(history.get(1).unwrap().text, "first");
    }

    #[test]
    fn oldest_entry_is_dropped_at_capacity() {
        let mut history = History::default();
        for ts in 0..45 {
            history.push(entry("line", ts));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        assert_eq!(history.get(0).unwrap().timestamp_ms, 44);
        assert_eq!(history.iter().last().unwrap().timestamp_ms, 5);
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut history = History::new(0);
        history.push(entry("a", 1));
        history.push(entry("b", 2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.get(0).unwrap().text, "b");
    }

    #[test]
    fn json_restore_respects_capacity() {
        let mut history = History::new(5);
        for ts in 0..5 {
            history.push(entry("x", ts));
        }
        let json = history.to_json().unwrap();
        let restored = History::from_json(&json, 3).unwrap();
        assert_eq!(restored.len(), 3);
        assert_eq!(restored.get(0).unwrap().timestamp_ms, 4);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = History::from_json("{not json", 10).unwrap_err();
        assert!(matches!(err, VoiceError::Serialization(_)));
    }

    #[test]
    fn replay_uses_the_recorded_controls() {
        let controls = VoiceControls::new(1.2, 0.9, EmotionLabel::Calm);
        let e = HistoryEntry::new("again", &controls, 7);
        assert_eq!(e.replay_controls(Language::default()), controls);
    }
}
