use glossa_core::RequestTicket;
use glossa_types::{AppEvent, PendingRequest};
use kanal::AsyncSender;

use crate::state::AppState;

/// Start a request and show the in-flight status. Returns `None` when the
/// controller's overlap policy dropped the activation.
pub async fn handle_translate_request(
    state: &AppState,
    pending: PendingRequest,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<Option<RequestTicket>> {
    tracing::info!(
        "Translate requested: {} chars, {}",
        pending.text.len(),
        pending.pair
    );

    let ticket = state
        .controller
        .request_translation(pending.text, pending.pair);

    match ticket {
        RequestTicket::Started { id, .. } => {
            tracing::debug!("Request {} started", id);
            app_to_ui_tx.send(AppEvent::Redraw).await?;
            Ok(Some(ticket))
        }
        RequestTicket::Ignored => {
            app_to_ui_tx
                .send(AppEvent::Notice(
                    "Still translating, request ignored".to_string(),
                ))
                .await?;
            Ok(None)
        }
    }
}
