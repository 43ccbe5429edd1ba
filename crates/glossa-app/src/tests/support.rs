use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use glossa_translator::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};
use tokio::sync::Notify;

/// Answers every request with the same reply, optionally holding it until released
pub struct StubTranslator {
    pub gate: Option<Arc<Notify>>,
    pub reply: Result<&'static str, &'static str>,
    pub detected: Result<&'static str, &'static str>,
}

impl StubTranslator {
    pub fn ok() -> Self {
        Self {
            gate: None,
            reply: Ok("Hola Mundo"),
            detected: Ok("fr"),
        }
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::ok()
        }
    }
}

#[async_trait]
impl Translator for StubTranslator {
    async fn translate(
        &self,
        _text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match self.reply {
            Ok(text) => Ok(Translation {
                text: text.to_string(),
                from,
                to,
                provider: "stub".to_string(),
                alternatives: vec![],
            }),
            Err(message) => Err(TranslateError::ApiError(message.to_string())),
        }
    }

    async fn detect_language(&self, _text: &str) -> Result<LanguageCode, TranslateError> {
        self.detected
            .map(str::to_string)
            .map_err(|e| TranslateError::ApiError(e.to_string()))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "stub".to_string(),
            requires_api_key: false,
        }
    }
}

/// Writer whose contents stay readable after it is moved into a task
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
