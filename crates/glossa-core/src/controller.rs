use std::sync::{Arc, Mutex};

use glossa_config::OverlapPolicy;
use glossa_translator::{TranslateError, Translation, Translator};
use glossa_types::LanguagePair;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::Instrument;
use uuid::Uuid;

use crate::signal::RedrawSignal;
use crate::state::{DisplayHandle, DisplaySnapshot, RequestState, Shared, SharedState, lock};

/// Result of activating translate
#[derive(Debug)]
pub enum RequestTicket {
    Started { id: Uuid, handle: JoinHandle<()> },
    /// Dropped because a request was already in flight
    Ignored,
}

impl RequestTicket {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started { .. })
    }

    pub fn is_finished(&self) -> bool {
        match self {
            Self::Started { handle, .. } => handle.is_finished(),
            Self::Ignored => true,
        }
    }

    /// Wait for the request task to finish. Ignored tickets finish immediately.
    pub async fn finished(self) -> Result<(), JoinError> {
        match self {
            Self::Started { handle, .. } => handle.await,
            Self::Ignored => Ok(()),
        }
    }
}

/// Runs translate requests in the background and owns the state they publish
pub struct TranslationController {
    shared: SharedState,
    translator: Arc<dyn Translator>,
    signal: Arc<dyn RedrawSignal>,
    policy: OverlapPolicy,
    cancel_token: CancellationToken,
}

impl TranslationController {
    pub fn new(
        translator: Arc<dyn Translator>,
        signal: impl RedrawSignal,
        policy: OverlapPolicy,
    ) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::default())),
            translator,
            signal: Arc::new(signal),
            policy,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    pub fn display_handle(&self) -> DisplayHandle {
        DisplayHandle::new(self.shared.clone())
    }

    pub fn current_display(&self) -> DisplaySnapshot {
        lock(&self.shared).display()
    }

    pub fn state(&self) -> RequestState {
        lock(&self.shared).state.clone()
    }

    /// Requests spawned and not yet completed or cancelled
    pub fn in_flight(&self) -> usize {
        lock(&self.shared).in_flight
    }

    /// Marks the state in flight before returning, then translates on a tokio task.
    ///
    /// Must be called from within a tokio runtime. The redraw signal fires once
    /// when the request completes; cancelled or superseded requests never fire it.
    /// Shutdown also abandons a redraw still waiting on a full UI queue.
    pub fn request_translation(&self, text: impl Into<String>, pair: LanguagePair) -> RequestTicket {
        let text = text.into();

        let (sequence, token) = {
            let mut shared = lock(&self.shared);

            if self.policy == OverlapPolicy::IgnoreWhileInFlight && shared.in_flight > 0 {
                tracing::debug!("Translate ignored, {} request(s) in flight", shared.in_flight);
                return RequestTicket::Ignored;
            }

            let token = self.cancel_token.child_token();
            if self.policy == OverlapPolicy::CancelStale {
                if let Some(stale) = shared.current.replace(token.clone()) {
                    tracing::debug!("Cancelling stale request");
                    stale.cancel();
                }
            }

            shared.sequence += 1;
            shared.in_flight += 1;
            shared.state = RequestState::InFlight;
            (shared.sequence, token)
        };

        let id = Uuid::new_v4();
        let span = tracing::info_span!("translate", request_id = %id, pair = %pair);

        let task = RequestTask {
            shared: self.shared.clone(),
            translator: self.translator.clone(),
            signal: self.signal.clone(),
            policy: self.policy,
            sequence,
        };
        let handle = tokio::spawn(task.run(text, pair, token).instrument(span));

        RequestTicket::Started { id, handle }
    }

    /// Cancel every request still in flight
    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

struct RequestTask {
    shared: SharedState,
    translator: Arc<dyn Translator>,
    signal: Arc<dyn RedrawSignal>,
    policy: OverlapPolicy,
    sequence: u64,
}

impl RequestTask {
    async fn run(self, text: String, pair: LanguagePair, token: CancellationToken) {
        tracing::debug!("Sending {} chars", text.len());

        let LanguagePair { source, target } = pair;
        let outcome = tokio::select! {
            _ = token.cancelled() => None,
            result = self.translator.translate(&text, source, target) => Some(result),
        };

        if !self.complete(outcome) {
            return;
        }

        // A full UI queue holds the task here until it drains or shutdown
        tokio::select! {
            biased;
            _ = self.signal.request_redraw() => {}
            _ = token.cancelled() => tracing::debug!("Redraw abandoned on shutdown"),
        }
    }

    /// Publish the outcome, returns whether the display changed. The lock is
    /// released before the caller signals.
    fn complete(&self, outcome: Option<Result<Translation, TranslateError>>) -> bool {
        let mut shared = lock(&self.shared);
        shared.in_flight = shared.in_flight.saturating_sub(1);

        let Some(result) = outcome else {
            tracing::debug!("Request cancelled");
            return false;
        };

        if self.policy == OverlapPolicy::CancelStale {
            if self.sequence != shared.sequence {
                tracing::debug!("Discarding superseded response");
                return false;
            }
            shared.current = None;
        }

        match result {
            Ok(translation) => {
                tracing::info!(
                    provider = %translation.provider,
                    "Translated into {} chars",
                    translation.text.len()
                );
                if !translation.alternatives.is_empty() {
                    tracing::debug!("{} alternative(s) ignored", translation.alternatives.len());
                }
                shared.last_output = translation.text.clone();
                shared.state = RequestState::Succeeded(translation.text);
            }
            Err(e) => {
                tracing::warn!("Translation error: {}", e);
                shared.state = RequestState::Failed(e.to_string());
            }
        }

        true
    }
}
