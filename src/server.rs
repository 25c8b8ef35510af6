//! HTTP surface: router, shared state and the translate handler.

use crate::config::Config;
use crate::dictionary;
use crate::models::{ErrorBody, TranslationRequest, TranslationResponse};
use crate::translation::{self, TranslationError};
use anyhow::Result;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error};

pub const READY_MESSAGE: &str = "Translation API ready";

/// State shared by every request. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let client = config.http_client()?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Text is required")]
    MissingText,

    #[error(transparent)]
    Translation(#[from] TranslationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::MissingText => (StatusCode::BAD_REQUEST, "Text is required"),
            ApiError::Translation(e) => {
                error!("Translation request failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(ready).fallback(not_found))
        .route("/api/", get(ready).fallback(not_found))
        .route("/api/translate", post(translate).fallback(not_found))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn ready() -> &'static str {
    READY_MESSAGE
}

async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (StatusCode::NOT_FOUND, Json(ErrorBody::new("Endpoint not found")))
}

/// Pull a non-empty `text` out of a raw request body.
///
/// An absent or non-JSON body counts as a missing text, the same as `{}`.
fn parse_text(body: &[u8]) -> Result<String, ApiError> {
    let request: TranslationRequest = serde_json::from_slice(body).unwrap_or_default();

    match request.text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ApiError::MissingText),
    }
}

async fn translate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TranslationResponse>, ApiError> {
    let text = parse_text(&body)?;
    let response = translate_and_enrich(&state, &text).await?;
    Ok(Json(response))
}

/// Translate `text` and look it up in the dictionary at the same time.
///
/// Both calls are in flight together; the result is built once both have
/// settled. Any failure fails the whole aggregation.
pub async fn translate_and_enrich(
    state: &AppState,
    text: &str,
) -> Result<TranslationResponse, TranslationError> {
    let (translation, entries) = tokio::try_join!(
        translation::translate_text(&state.client, &state.config, text),
        async {
            Ok::<_, TranslationError>(
                dictionary::get_word_details(&state.client, &state.config, text).await,
            )
        }
    )?;

    debug!(
        "Aggregated translation for {:?} with {} dictionary entries",
        text,
        entries.len()
    );

    Ok(TranslationResponse {
        translation,
        pronunciation: dictionary::extract_pronunciation(&entries),
        examples: dictionary::extract_examples(&entries),
    })
}
