use glossa_types::{Language, LanguagePair, PendingRequest, find_language};

/// What the user is editing: the input text and the selected languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub input: String,
    pub pair: LanguagePair,
}

impl FormState {
    pub fn new(input: impl Into<String>, pair: LanguagePair) -> Self {
        Self {
            input: input.into(),
            pair,
        }
    }

    /// Copy taken at activation; later edits do not affect a running request
    pub fn snapshot(&self) -> PendingRequest {
        PendingRequest {
            text: self.input.clone(),
            pair: self.pair.clone(),
        }
    }

    /// Returns `None` and leaves the selection alone for codes outside the table
    pub fn select_source(&mut self, code: &str) -> Option<&'static Language> {
        let lang = find_language(code)?;
        self.pair.source = lang.code.to_string();
        Some(lang)
    }

    pub fn select_target(&mut self, code: &str) -> Option<&'static Language> {
        let lang = find_language(code)?;
        self.pair.target = lang.code.to_string();
        Some(lang)
    }

    pub fn swap(&mut self) {
        self.pair = self.pair.swapped();
    }
}
