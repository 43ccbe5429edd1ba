use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_from_lang() -> String {
    "en".to_string()
}

fn default_to_lang() -> String {
    "es".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Base URL of a LibreTranslate-compatible service, e.g. https://libretranslate.com
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Empty means the service does not require a key
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_from_lang")]
    pub from_lang: String,
    #[serde(default = "default_to_lang")]
    pub to_lang: String,
    /// Per-request HTTP timeout, 0 disables it
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl TranslatorConfig {
    pub fn api_key(&self) -> Option<&str> {
        let key = self.api_key.trim();
        (!key.is_empty()).then_some(key)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
            from_lang: default_from_lang(),
            to_lang: default_to_lang(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
