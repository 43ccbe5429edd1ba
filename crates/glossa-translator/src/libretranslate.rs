use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{LanguageCode, ProviderMetadata, TranslateError, Translation, Translator};

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    #[serde(default)]
    alternatives: Vec<String>,
}

#[derive(Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct Detection {
    language: String,
    confidence: f32,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Client for a LibreTranslate-compatible HTTP service
#[derive(Clone)]
pub struct LibreTranslateClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl LibreTranslateClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Same as [`LibreTranslateClient::new`] with a per-request timeout
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, TranslateError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into(),
            api_key,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, TranslateError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(err) => err.error,
                Err(_) if body.trim().is_empty() => {
                    status.canonical_reason().unwrap_or_default().to_string()
                }
                Err(_) => body.trim().to_string(),
            };
            tracing::warn!("{} returned HTTP {}: {}", url, status.as_u16(), message);
            return Err(TranslateError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&body).map_err(|e| TranslateError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Translator for LibreTranslateClient {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response: TranslateResponse = self.post("translate", &request).await?;

        Ok(Translation {
            text: response.translated_text,
            from,
            to,
            provider: "libretranslate".to_string(),
            alternatives: response.alternatives,
        })
    }

    async fn detect_language(&self, text: &str) -> Result<LanguageCode, TranslateError> {
        let request = DetectRequest {
            q: text,
            api_key: self.api_key.as_deref(),
        };

        let detections: Vec<Detection> = self.post("detect", &request).await?;

        let best = detections
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::ApiError("No language detected".to_string()))?;

        tracing::debug!("Detected '{}' ({:.1}%)", best.language, best.confidence);
        Ok(best.language)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: self.api_key.is_some(),
        }
    }
}
