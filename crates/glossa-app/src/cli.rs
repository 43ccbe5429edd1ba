use std::path::PathBuf;

use clap::Parser;
use glossa_config::{Config, OverlapPolicy};
use glossa_types::is_supported;

#[derive(Parser, Debug, Default)]
#[command(name = "glossa", version, about = "Translate text through a LibreTranslate service")]
pub struct Args {
    /// JSON profile to load instead of the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the translation service
    #[arg(long)]
    pub api_url: Option<String>,

    #[arg(long)]
    pub api_key: Option<String>,

    /// Source language code
    #[arg(long = "from")]
    pub from_lang: Option<String>,

    /// Target language code
    #[arg(long = "to")]
    pub to_lang: Option<String>,

    /// What to do with a new request while one is in flight: concurrent, ignore or cancel
    #[arg(long)]
    pub policy: Option<OverlapPolicy>,

    /// Translate this text once, print the result and exit
    #[arg(long)]
    pub text: Option<String>,
}

impl Args {
    /// Defaults or profile, then `GLOSSA_*` environment, then flags
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading config from {}", path.display());
                Config::from_file(path)?
            }
            None => Config::new()?,
        };
        self.apply(&mut config);

        for code in [&config.translator.from_lang, &config.translator.to_lang] {
            if !is_supported(code) {
                tracing::warn!("'{}' is not in the language list", code);
            }
        }

        Ok(config)
    }

    fn apply(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.translator.api_url = url.clone();
        }
        if let Some(key) = &self.api_key {
            config.translator.api_key = key.clone();
        }
        if let Some(from) = &self.from_lang {
            config.translator.from_lang = from.clone();
        }
        if let Some(to) = &self.to_lang {
            config.translator.to_lang = to.clone();
        }
        if let Some(policy) = self.policy {
            config.overlap_policy = policy;
        }
    }
}
