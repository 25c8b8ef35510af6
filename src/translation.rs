use crate::config::Config;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Language every request is translated into
pub const TARGET_LANGUAGE: &str = "pt";

/// Failure of the translation provider call
///
/// The display text is for logs only; it never reaches an HTTP response.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to send translation request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Translation API error ({status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse translation response: {0}")]
    Parse(#[source] reqwest::Error),

    #[error("Translation response contained no translatedText")]
    MissingField,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    target_lang: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

fn translate_endpoint(base_url: &str) -> String {
    format!("{}/translate", base_url.trim_end_matches('/'))
}

/// Translate `text` into [`TARGET_LANGUAGE`]
///
/// A single attempt is made. Any transport error, non-2xx status or malformed
/// body becomes a [`TranslationError`].
pub async fn translate_text(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
) -> Result<String, TranslationError> {
    let result = request_translation(client, config, text).await;
    if let Err(e) = &result {
        warn!("Translation failed: {}", e);
    }
    result
}

async fn request_translation(
    client: &reqwest::Client,
    config: &Config,
    text: &str,
) -> Result<String, TranslationError> {
    let request = TranslateRequest {
        text,
        target_lang: TARGET_LANGUAGE,
    };

    let response = client
        .post(translate_endpoint(&config.translate_url))
        .header("Content-Type", "application/json")
        .header("x-rapidapi-host", &config.rapidapi_host)
        .header("x-rapidapi-key", &config.rapidapi_key)
        .json(&request)
        .send()
        .await
        .map_err(TranslationError::Request)?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
        return Err(TranslationError::Status { status, body });
    }

    let parsed: TranslateResponse = response.json().await.map_err(TranslationError::Parse)?;

    parsed.translated_text.ok_or(TranslationError::MissingField)
}
