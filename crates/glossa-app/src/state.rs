use std::sync::Arc;

use glossa_config::Config;
use glossa_core::TranslationController;
use glossa_translator::Translator;

pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn Translator>,
    pub controller: TranslationController,
}

impl AppState {
    pub fn new(
        config: Config,
        translator: Arc<dyn Translator>,
        controller: TranslationController,
    ) -> Self {
        Self {
            config,
            translator,
            controller,
        }
    }
}
