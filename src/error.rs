//! Relay error taxonomy.
//!
//! Every failure mode is a distinct variant produced by a distinct code
//! path, and every variant converts to a JSON `{"resposta": ...}` body with
//! the matching HTTP status. Nothing escapes the handler boundary as a
//! non-JSON error page.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::types::GenerateResponse;

/// Errors produced while relaying a generation request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The customer message was empty after trimming. No outbound call made.
    #[error("empty message after trimming")]
    EmptyMessage,

    /// `OPENROUTER_API_KEY` is not configured. No outbound call made.
    #[error("OpenRouter API key is not configured")]
    MissingApiKey,

    /// The outbound completion request exceeded the client timeout.
    #[error("upstream request timed out")]
    UpstreamTimeout,

    /// The completion API returned a non-2xx status or the connection failed.
    #[error("upstream request failed: {0}")]
    Upstream(String),

    /// Any other fault (malformed request body, unparseable provider JSON).
    #[error("internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// HTTP status for this failure class.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::EmptyMessage => StatusCode::BAD_REQUEST,
            RelayError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing `resposta` text. The emoji prefix signals severity in the
    /// chat-bot UI: ⚠️ validation, ❌ error.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::EmptyMessage => "⚠️ Nenhuma mensagem recebida.".to_string(),
            RelayError::MissingApiKey => {
                "❌ Chave da OpenRouter ausente no servidor.".to_string()
            }
            RelayError::UpstreamTimeout => {
                "❌ Tempo esgotado ao tentar gerar resposta. Tente novamente.".to_string()
            }
            RelayError::Upstream(detail) => {
                format!("❌ Erro na requisição ao gerar resposta: {}", detail)
            }
            RelayError::Internal(detail) => {
                format!("❌ Erro interno ao gerar resposta: {}", detail)
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        let body = Json(GenerateResponse {
            resposta: self.user_message(),
        });
        (self.status(), body).into_response()
    }
}
