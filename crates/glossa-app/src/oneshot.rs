use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use glossa_core::{RedrawSignal, RequestState, TranslationController};
use glossa_translator::Translator;
use glossa_types::LanguagePair;

/// Nothing to redraw in one-shot mode
struct NoRedraw;

#[async_trait]
impl RedrawSignal for NoRedraw {
    async fn request_redraw(&self) {}
}

/// Translate `text` once. The output goes to `out` and the exit code is 0.
/// On failure the error status goes to `err` and the exit code is 1.
pub async fn translate_once(
    translator: Arc<dyn Translator>,
    text: String,
    pair: LanguagePair,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<i32> {
    let controller = TranslationController::new(translator, NoRedraw, Default::default());
    controller.request_translation(text, pair).finished().await?;

    let display = controller.current_display();
    match controller.state() {
        RequestState::Failed(_) => {
            writeln!(err, "{}", display.status)?;
            Ok(1)
        }
        _ => {
            writeln!(out, "{}", display.output)?;
            Ok(0)
        }
    }
}
