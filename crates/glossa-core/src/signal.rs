use std::sync::Arc;

use async_trait::async_trait;
use glossa_types::AppEvent;
use kanal::AsyncSender;

/// Tells the presentation layer that the display changed.
///
/// Awaited by the request task after the state lock is released, so a slow
/// consumer delays the task but never loses the signal.
#[async_trait]
pub trait RedrawSignal: Send + Sync + 'static {
    async fn request_redraw(&self);
}

#[async_trait]
impl<T: RedrawSignal + ?Sized> RedrawSignal for Arc<T> {
    async fn request_redraw(&self) {
        (**self).request_redraw().await;
    }
}

#[async_trait]
impl RedrawSignal for AsyncSender<AppEvent> {
    async fn request_redraw(&self) {
        if let Err(e) = self.send(AppEvent::Redraw).await {
            tracing::debug!("Redraw dropped, UI channel closed: {}", e);
        }
    }
}
