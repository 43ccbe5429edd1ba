use std::io::Write;

use glossa_core::DisplayHandle;
use glossa_types::AppEvent;
use glossa_ui::TerminalUi;
use glossa_ui::screen::Screen;
use glossa_ui::state::FormState;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;

pub async fn ui_loop<R, W>(
    form: FormState,
    display: DisplayHandle,
    input: R,
    screen: Screen<W>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    tracing::info!("Starting UI: {}", form.pair.action_label());
    TerminalUi::new(form, screen, display)
        .run(input, &app_to_ui_rx, &ui_to_app_tx, cancel)
        .await?;
    tracing::debug!("UI stopped");
    Ok(())
}
