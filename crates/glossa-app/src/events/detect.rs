use std::sync::Arc;

use glossa_translator::Translator;
use glossa_types::AppEvent;
use kanal::AsyncSender;

pub async fn handle_detect(
    translator: Arc<dyn Translator>,
    text: String,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let event = match translator.detect_language(&text).await {
        Ok(code) => {
            tracing::info!("Detected language: {}", code);
            AppEvent::LanguageDetected { code }
        }
        Err(e) => {
            tracing::warn!("Detection error: {}", e);
            AppEvent::Notice(format!("Error: {e}"))
        }
    };

    app_to_ui_tx.send(event).await?;
    Ok(())
}
