use std::io::{Stdout, Write};

use glossa_core::{DisplayHandle, DisplaySnapshot};
use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;

pub mod commands;
pub mod events;
pub mod screen;
pub mod state;

use self::commands::parse_command;
use self::events::{Flow, handle_command, handle_event};
use self::screen::Screen;
use self::state::FormState;

/// Where the UI reads the status/output pair from on redraw
pub trait DisplaySource: Send + Sync {
    fn current_display(&self) -> DisplaySnapshot;
}

impl DisplaySource for DisplayHandle {
    fn current_display(&self) -> DisplaySnapshot {
        DisplayHandle::current_display(self)
    }
}

pub struct TerminalUi<W: Write, D: DisplaySource> {
    form: FormState,
    screen: Screen<W>,
    display: D,
}

impl<W: Write, D: DisplaySource> TerminalUi<W, D> {
    pub fn new(form: FormState, screen: Screen<W>, display: D) -> Self {
        Self {
            form,
            screen,
            display,
        }
    }

    /// Runs until the user quits, the app sends `Close`, or `cancel` fires.
    /// End of input hands over to the app, which closes once requests drain.
    pub async fn run<R: AsyncBufRead + Unpin>(
        mut self,
        input: R,
        app_to_ui_rx: &AsyncReceiver<AppEvent>,
        ui_to_app_tx: &AsyncSender<AppEvent>,
        cancel: CancellationToken,
    ) -> anyhow::Result<W> {
        let mut lines = input.lines();
        let mut input_open = true;

        self.screen.label(&self.form.pair)?;
        self.screen.prompt()?;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("[UI] Cancelled");
                    break;
                }
                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        tracing::debug!("[UI] Input closed");
                        input_open = false;
                        ui_to_app_tx.send(AppEvent::InputClosed).await?;
                        continue;
                    };

                    match handle_command(parse_command(&line), &mut self.form, &mut self.screen)? {
                        Flow::Continue => self.screen.prompt()?,
                        Flow::Send(event) => ui_to_app_tx.send(event).await?,
                        Flow::Quit => {
                            ui_to_app_tx.send(AppEvent::Close).await?;
                            break;
                        }
                    }
                }
                event = app_to_ui_rx.recv() => {
                    match event {
                        Ok(AppEvent::Close) | Err(_) => break,
                        Ok(event) => {
                            handle_event(event, &mut self.form, &mut self.screen, &self.display)?;
                            if input_open {
                                self.screen.prompt()?;
                            }
                        }
                    }
                }
            }
        }

        Ok(self.screen.into_inner())
    }
}

/// Screen on stdout. Prompt and label only show when stdin is a terminal.
pub fn stdout_screen() -> Screen<Stdout> {
    let interactive = atty::is(atty::Stream::Stdin);
    tracing::debug!("[UI] Terminal interactive: {}", interactive);
    Screen::new(std::io::stdout(), interactive)
}
