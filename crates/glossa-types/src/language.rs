/// A language the user can pick as source or target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code sent to the translation service
    pub code: &'static str,
    pub name: &'static str,
}

/// Fixed selection list. The service can report more, but the picker only
/// offers these.
pub const SUPPORTED_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ru", name: "Russian" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    SUPPORTED_LANGUAGES.iter().find(|lang| lang.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_language(code).is_some()
}
