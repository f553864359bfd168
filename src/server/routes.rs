//! Axum route handlers for the ZapAgent relay.
//!
//! # Routes
//!
//! - `GET  /`                           — Liveness probe, plain text
//! - `POST /gerar-resposta-profissional` — Generate a professional reply
//!
//! Every POST outcome, success or failure, is a JSON `{"resposta": ...}`
//! body; error statuses follow the [`RelayError`] taxonomy.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::llms::openrouter::OpenRouterCompletion;
use crate::llms::{ChatMessage, CompletionProvider};
use crate::prompt::compose_system_prompt;
use crate::types::{GenerateRequest, GenerateResponse};

/// Liveness string returned by `GET /`.
pub const LIVENESS_MESSAGE: &str = "🧠 API ZapAgent Gerador Profissional está online.";

/// Returned with 200 when the provider answers without choices.
pub const FALLBACK_RESPOSTA: &str = "⚠️ Nenhuma resposta válida recebida da IA.";

/// Shared application state: the completion provider behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// Build state with the real OpenRouter client.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            provider: Arc::new(OpenRouterCompletion::new(config)?),
        })
    }

    /// Build state around an arbitrary provider. Used by tests to substitute
    /// fakes.
    pub fn with_provider(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }
}

/// Build the axum router with all routes. CORS is permissive, matching the
/// original deployment behind the ZapAgent web builder.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/gerar-resposta-profissional", post(gerar_resposta_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET / — liveness probe, independent of credential configuration.
async fn home_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// POST /gerar-resposta-profissional — relay one customer message.
///
/// The JSON rejection is taken as a handler argument so that a malformed
/// body maps onto the internal-fault path (500, JSON `resposta` body)
/// instead of the framework's plain-text error page.
async fn gerar_resposta_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, RelayError> {
    let Json(request) = payload.map_err(|rejection| RelayError::Internal(rejection.body_text()))?;
    tracing::debug!(payload = ?request, "received generation request");

    let request = request.normalize();
    if request.mensagem.is_empty() {
        return Err(RelayError::EmptyMessage);
    }

    let prompt = compose_system_prompt(&request);
    let messages = vec![
        ChatMessage::system(prompt),
        ChatMessage::user(request.mensagem),
    ];

    let resposta = match state.provider.complete(messages).await? {
        Some(content) => content.trim().to_string(),
        None => FALLBACK_RESPOSTA.to_string(),
    };

    Ok(Json(GenerateResponse { resposta }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
