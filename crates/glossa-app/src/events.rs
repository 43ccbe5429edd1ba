use std::sync::Arc;

use glossa_core::RequestTicket;
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod detect;
pub mod translate;

use detect::handle_detect;
use translate::handle_translate_request;

/// Whether the event loop keeps running after an event
enum Next {
    Continue,
    Stop,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let metadata = state.translator.metadata();
    tracing::info!(
        "[EVENT_LOOP] Using {} at {} (api key: {}, policy: {})",
        metadata.name,
        state.config.translator.api_url,
        if metadata.requires_api_key { "set" } else { "none" },
        state.controller.policy()
    );

    let mut tickets: Vec<RequestTicket> = Vec::new();
    let mut side_tasks: JoinSet<anyhow::Result<()>> = JoinSet::new();

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("[EVENT_LOOP] Cancelled");
                break;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("[EVENT_LOOP] UI channel closed");
                    break;
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );

        let next = handle_events(
            &state,
            &app_to_ui_tx,
            &mut tickets,
            &mut side_tasks,
            event,
        )
        .await?;

        while let Some(result) = side_tasks.try_join_next() {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::warn!("side task failed: {e}"),
                Err(e) => tracing::error!("side task panicked: {e}"),
            }
        }

        if let Next::Stop = next {
            break;
        }
    }

    Ok(())
}

async fn handle_events(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    tickets: &mut Vec<RequestTicket>,
    side_tasks: &mut JoinSet<anyhow::Result<()>>,
    event: AppEvent,
) -> anyhow::Result<Next> {
    match event {
        AppEvent::TranslateRequested(pending) => {
            if let Some(ticket) = handle_translate_request(state, pending, app_to_ui_tx).await? {
                tickets.retain(|t| !t.is_finished());
                tickets.push(ticket);
            }
        }
        AppEvent::DetectRequested { text } => {
            side_tasks.spawn(handle_detect(
                state.translator.clone(),
                text,
                app_to_ui_tx.clone(),
            ));
        }
        AppEvent::InputClosed => {
            tracing::info!(
                "Input closed, waiting for {} request(s)",
                state.controller.in_flight()
            );
            for ticket in tickets.drain(..) {
                if let Err(e) = ticket.finished().await {
                    tracing::error!("request task panicked: {e}");
                }
            }
            while let Some(result) = side_tasks.join_next().await {
                if let Ok(Err(e)) = result {
                    tracing::warn!("side task failed: {e}");
                }
            }
            app_to_ui_tx.send(AppEvent::Close).await?;
            return Ok(Next::Stop);
        }
        AppEvent::Close => {
            tracing::info!("Close requested");
            state.controller.shutdown();
            return Ok(Next::Stop);
        }
        AppEvent::Redraw
        | AppEvent::Notice(_)
        | AppEvent::LanguageDetected { .. }
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(Next::Continue)
}
