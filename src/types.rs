//! Typed request/response payloads for the generation route.
//!
//! Field defaults are substituted in an explicit normalization step rather
//! than read dynamically out of a JSON map, so "field missing" is an
//! auditable part of parsing instead of a silent fallback.

use serde::{Deserialize, Serialize};

/// Tone applied when the request omits `tom`.
pub const DEFAULT_TOM: &str = "profissional";

/// Category applied when the request omits `tipo`.
pub const DEFAULT_TIPO: &str = "resposta";

/// Inbound payload for `POST /gerar-resposta-profissional`.
///
/// `mensagem` is serde-defaulted to the empty string so that an absent field
/// flows into the same validation path as a blank one.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Customer message to answer. Required, non-empty after trimming.
    #[serde(default)]
    pub mensagem: String,
    /// Desired tone of the reply. Free text, defaults to "profissional".
    pub tom: Option<String>,
    /// Reply category. Free text, defaults to "resposta".
    pub tipo: Option<String>,
}

impl GenerateRequest {
    /// Apply trimming, case normalization, and default substitution.
    pub fn normalize(self) -> NormalizedRequest {
        NormalizedRequest {
            mensagem: self.mensagem.trim().to_string(),
            tom: self
                .tom
                .map(|t| t.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_TOM.to_string()),
            tipo: self
                .tipo
                .map(|t| t.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_TIPO.to_string()),
        }
    }
}

/// A [`GenerateRequest`] after normalization. All fields are final.
#[derive(Debug, Clone)]
pub struct NormalizedRequest {
    pub mensagem: String,
    pub tom: String,
    pub tipo: String,
}

/// The single response body shape for the generation route, success or
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated reply, fallback text, or emoji-prefixed error message.
    pub resposta: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_fields_absent() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"mensagem": "Olá, preciso de ajuda"}"#).unwrap();
        let norm = req.normalize();
        assert_eq!(norm.tom, "profissional");
        assert_eq!(norm.tipo, "resposta");
    }

    #[test]
    fn test_tom_and_tipo_are_trimmed_and_lowercased() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"mensagem": "oi", "tom": "  Amigável ", "tipo": "ORÇAMENTO"}"#)
                .unwrap();
        let norm = req.normalize();
        assert_eq!(norm.tom, "amigável");
        assert_eq!(norm.tipo, "orçamento");
    }

    #[test]
    fn test_mensagem_is_trimmed() {
        let req: GenerateRequest =
            serde_json::from_str(r#"{"mensagem": "  bom dia  "}"#).unwrap();
        assert_eq!(req.normalize().mensagem, "bom dia");
    }

    #[test]
    fn test_missing_mensagem_normalizes_to_empty() {
        let req: GenerateRequest = serde_json::from_str(r#"{"tom": "formal"}"#).unwrap();
        assert!(req.normalize().mensagem.is_empty());
    }

    #[test]
    fn test_whitespace_only_mensagem_normalizes_to_empty() {
        let req: GenerateRequest = serde_json::from_str(r#"{"mensagem": "   \n\t "}"#).unwrap();
        assert!(req.normalize().mensagem.is_empty());
    }
}
