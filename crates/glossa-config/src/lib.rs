use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod translator;
pub mod ui;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown overlap policy '{0}' (expected concurrent, ignore or cancel)")]
    InvalidPolicy(String),
}

/// What happens when translate is activated while a request is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OverlapPolicy {
    /// Every activation runs; the last response to arrive wins
    #[default]
    #[serde(rename = "concurrent")]
    Concurrent,
    /// Activations are dropped until the running request finishes
    #[serde(rename = "ignore")]
    IgnoreWhileInFlight,
    /// A new activation cancels the running request
    #[serde(rename = "cancel")]
    CancelStale,
}

impl FromStr for OverlapPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "ignore" => Ok(Self::IgnoreWhileInFlight),
            "cancel" => Ok(Self::CancelStale),
            other => Err(ConfigError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Concurrent => "concurrent",
            Self::IgnoreWhileInFlight => "ignore",
            Self::CancelStale => "cancel",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ui: UiConfig,
    pub overlap_policy: OverlapPolicy,
}

impl Config {
    /// Defaults overridden by `GLOSSA_*` environment variables
    pub fn new() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// JSON profile, missing fields take their defaults, then environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.apply_env()?;
        Ok(config)
    }

    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_vars(|key| env::var(key).ok())
    }

    /// Overlay values from a variable lookup. Unparseable numbers keep the current value.
    pub fn apply_vars(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(url) = lookup("GLOSSA_API_URL") {
            self.translator.api_url = url;
        }
        if let Some(key) = lookup("GLOSSA_API_KEY") {
            self.translator.api_key = key;
        }
        if let Some(from) = lookup("GLOSSA_FROM_LANG") {
            self.translator.from_lang = from;
        }
        if let Some(to) = lookup("GLOSSA_TO_LANG") {
            self.translator.to_lang = to;
        }
        if let Some(timeout) = lookup("GLOSSA_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.translator.timeout_seconds = timeout;
        }
        if let Some(policy) = lookup("GLOSSA_OVERLAP_POLICY") {
            self.overlap_policy = policy.parse()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_local_service() {
        let config = Config::default();
        assert_eq!(config.translator.api_url, "http://localhost:5000");
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "es");
        assert_eq!(config.translator.timeout_seconds, 30);
        assert_eq!(config.translator.api_key(), None);
        assert_eq!(config.ui.initial_text, "Hello world");
        assert_eq!(config.overlap_policy, OverlapPolicy::Concurrent);
    }

    #[test]
    fn env_overrides_defaults() {
        let mut config = Config::default();
        config
            .apply_vars(vars(&[
                ("GLOSSA_API_URL", "https://libretranslate.com"),
                ("GLOSSA_API_KEY", "secret"),
                ("GLOSSA_TO_LANG", "fr"),
                ("GLOSSA_TIMEOUT_SECONDS", "5"),
                ("GLOSSA_OVERLAP_POLICY", "cancel"),
            ]))
            .unwrap();

        assert_eq!(config.translator.api_url, "https://libretranslate.com");
        assert_eq!(config.translator.api_key(), Some("secret"));
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "fr");
        assert_eq!(config.translator.timeout_seconds, 5);
        assert_eq!(config.overlap_policy, OverlapPolicy::CancelStale);
    }

    #[test]
    fn bad_timeout_keeps_current_value() {
        let mut config = Config::default();
        config
            .apply_vars(vars(&[("GLOSSA_TIMEOUT_SECONDS", "soon")]))
            .unwrap();
        assert_eq!(config.translator.timeout_seconds, 30);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_vars(vars(&[("GLOSSA_OVERLAP_POLICY", "queue")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPolicy(ref p) if p == "queue"));
    }

    #[test]
    fn policy_round_trips_through_display() {
        for policy in [
            OverlapPolicy::Concurrent,
            OverlapPolicy::IgnoreWhileInFlight,
            OverlapPolicy::CancelStale,
        ] {
            assert_eq!(policy.to_string().parse::<OverlapPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn partial_json_profile_fills_defaults() {
        let json = r#"{
            "translator": { "api_url": "https://translate.example.org", "to_lang": "de" },
            "overlap_policy": "ignore"
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.translator.api_url, "https://translate.example.org");
        assert_eq!(config.translator.from_lang, "en");
        assert_eq!(config.translator.to_lang, "de");
        assert_eq!(config.ui.initial_text, "Hello world");
        assert_eq!(config.overlap_policy, OverlapPolicy::IgnoreWhileInFlight);
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = Config::from_file("/nonexistent/glossa/profile.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn from_file_reports_bad_json() {
        let path = env::temp_dir().join(format!("glossa-bad-{}.json", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        let _ = fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
