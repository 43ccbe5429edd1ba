use std::future::Future;
use std::io::{self, Write};
use std::sync::Arc;

use glossa_config::Config;
use glossa_core::TranslationController;
use glossa_translator::Translator;
use glossa_types::{AppEvent, LanguagePair};
use glossa_ui::screen::Screen;
use glossa_ui::state::FormState;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufRead, BufReader};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(256), // redraws and notices
            ui_to_app: kanal::bounded_async(64),  // UI interactions
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config, translator: Arc<dyn Translator>) -> Self {
        let channels = ChannelSet::new();
        let controller = TranslationController::new(
            translator.clone(),
            channels.app_to_ui.0.clone(),
            config.overlap_policy,
        );

        Self {
            channels,
            state: Arc::new(AppState::new(config, translator, controller)),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Event loop plus the terminal UI on stdin/stdout
    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let input = BufReader::new(tokio::io::stdin());
        self.spawn_tasks_with(input, glossa_ui::stdout_screen())
    }

    pub fn spawn_tasks_with<R, W>(&self, input: R, screen: Screen<W>) -> JoinSet<anyhow::Result<()>>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: Write + Send + 'static,
    {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.cancel_token.child_token(),
        ));

        // UI loop
        let form = {
            let config = &self.state.config;
            FormState::new(
                config.ui.initial_text.clone(),
                LanguagePair::new(
                    config.translator.from_lang.clone(),
                    config.translator.to_lang.clone(),
                ),
            )
        };
        tasks.spawn(ui_loop(
            form,
            self.state.controller.display_handle(),
            input,
            screen,
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.state.controller.shutdown();
        self.cancel_token.cancel();
    }
}

/// Returns on Ctrl+C or when a task stops. A Ctrl+C listener that fails to
/// install is logged and the tasks keep running.
pub async fn supervise(
    tasks: &mut JoinSet<anyhow::Result<()>>,
    ctrl_c: impl Future<Output = io::Result<()>>,
) {
    tokio::pin!(ctrl_c);
    let mut ctrl_c_armed = true;

    loop {
        tokio::select! {
            result = &mut ctrl_c, if ctrl_c_armed => match result {
                Ok(()) => {
                    tracing::info!("Shutdown requested");
                    break;
                }
                Err(e) => {
                    tracing::error!("Ctrl+C handler unavailable: {e}");
                    ctrl_c_armed = false;
                }
            },
            next = tasks.join_next() => match next {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("task exited: {e}");
                    break;
                }
                Some(Err(e)) => {
                    tracing::error!("task panicked: {e}");
                    break;
                }
            },
        }
    }
}
