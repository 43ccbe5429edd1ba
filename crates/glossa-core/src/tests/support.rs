use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use glossa_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use tokio::sync::Notify;

use crate::signal::RedrawSignal;

/// Translator whose replies are scripted per target language
#[derive(Default)]
pub struct FakeTranslator {
    replies: Mutex<HashMap<String, Result<String, String>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl FakeTranslator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, target: &str, text: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(target.to_string(), Ok(text.to_string()));
    }

    pub fn fail(&self, target: &str, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .insert(target.to_string(), Err(message.to_string()));
    }

    /// Requests for `target` block until the returned gate is notified
    pub fn gate(&self, target: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.gates
            .lock()
            .unwrap()
            .insert(target.to_string(), gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), from.clone(), to.clone()));

        let gate = self.gates.lock().unwrap().get(&to).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&to)
            .cloned()
            .unwrap_or_else(|| Err(format!("no reply scripted for {to}")));

        match reply {
            Ok(text) => Ok(Translation {
                text,
                from,
                to,
                provider: "fake".to_string(),
                alternatives: vec![],
            }),
            Err(message) => Err(TranslateError::ApiError(message)),
        }
    }

    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslateError> {
        Ok("en".to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

#[derive(Default)]
pub struct CountingSignal {
    count: AtomicUsize,
}

impl CountingSignal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RedrawSignal for CountingSignal {
    async fn request_redraw(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
