//! BCP-47 language tag (e.g. "en-US").
use serde::{Deserialize, Serialize};

/// Languages tried, in order, when picking a default from the installed voices.
pub const PREFERRED_LANGUAGES: [&str; 5] = ["en-IN", "te-IN", "hi-IN", "ta-IN", "en-US"];

/// Language hint passed through to the speech engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a new language tag.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the underlying language code.
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Primary subtag, e.g. `en` for `en-IN`.
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Case-insensitive tag comparison.
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code)
    }

    /// English (US)
    pub fn english_us() -> Self {
        Self::new("en-US")
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english_us()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
