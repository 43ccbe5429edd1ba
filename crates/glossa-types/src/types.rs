use serde::{Deserialize, Serialize};

use crate::language::find_language;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// User activated translate; carries the snapshot taken at click time
    TranslateRequested(PendingRequest),
    DetectRequested {
        text: String,
    },
    LanguageDetected {
        code: String,
    },
    /// One-line message for the user that is not part of the request state
    Notice(String),
    /// Request state changed, presentation layer should re-read the display
    Redraw,
    BackendReady,
    /// No more user input; finish outstanding requests, then close
    InputClosed,
    Close,
}

/// Source/target selection. Source and target may be equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
        }
    }

    /// Label for the translate action, e.g. "Translate from English to Spanish".
    /// Codes outside the language table render with an empty name.
    pub fn action_label(&self) -> String {
        let name = |code: &str| find_language(code).map(|l| l.name).unwrap_or_default();
        format!(
            "Translate from {} to {}",
            name(self.source.as_str()),
            name(self.target.as_str())
        )
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("en", "es")
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

/// Input text and language pair captured when translate is activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub text: String,
    pub pair: LanguagePair,
}
