//! OpenRouter chat-completion client.
//!
//! Issues one `POST {base_url}/chat/completions` per invocation with bearer
//! auth, the fixed model, and the ZapAgent attribution headers. Transport
//! failures are classified into [`RelayError`] variants; a 2xx response with
//! no choices degrades to `Ok(None)` rather than an error.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::llms::{ChatMessage, CompletionProvider};

/// Request body for the chat-completions endpoint.
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

/// Response body from the chat-completions endpoint. Only the fields the
/// relay consumes are modeled; `choices` defaults to empty when absent.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// OpenRouter completion provider.
///
/// The credential is optional: when absent, [`complete`](Self::complete)
/// fails with [`RelayError::MissingApiKey`] before any network activity, so
/// an unconfigured process still boots and serves liveness.
#[derive(Debug, Clone)]
pub struct OpenRouterCompletion {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    referer: String,
    title: String,
}

impl OpenRouterCompletion {
    /// Build a client from the relay configuration. The reqwest client
    /// carries the configured timeout so requests fail fast.
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RelayError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Classify a reqwest failure: timeouts map to 504, everything else to
    /// an upstream transport error (502).
    fn classify_transport(error: reqwest::Error) -> RelayError {
        if error.is_timeout() {
            RelayError::UpstreamTimeout
        } else {
            RelayError::Upstream(error.to_string())
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterCompletion {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<Option<String>, RelayError> {
        let api_key = self.api_key.as_deref().ok_or(RelayError::MissingApiKey)?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &messages,
        };
        tracing::debug!(
            body = %serde_json::to_string(&body).unwrap_or_default(),
            "sending completion request to OpenRouter"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&body)
            .send()
            .await
            .map_err(Self::classify_transport)?;

        let status = response.status();
        let text = response.text().await.map_err(Self::classify_transport)?;
        tracing::debug!(%status, body = %text, "OpenRouter response");

        if !status.is_success() {
            let detail: String = text.chars().take(500).collect();
            return Err(RelayError::Upstream(format!("status {}: {}", status, detail)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| RelayError::Internal(format!("unparseable provider response: {}", e)))?;

        Ok(parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_network_call() {
        let provider = OpenRouterCompletion::new(&RelayConfig::new(None)).unwrap();
        let result = provider.complete(vec![ChatMessage::user("oi")]).await;
        assert!(matches!(result, Err(RelayError::MissingApiKey)));
    }

    #[test]
    fn test_request_body_shape() {
        let messages = vec![
            ChatMessage::system("prompt"),
            ChatMessage::user("mensagem"),
        ];
        let body = ChatCompletionRequest {
            model: "deepseek/deepseek-r1:free",
            messages: &messages,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "deepseek/deepseek-r1:free");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "prompt");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "mensagem");
    }

    #[test]
    fn test_response_with_choices_parses_first_content() {
        let parsed: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Olá!"}},
                            {"message": {"role": "assistant", "content": "segunda"}}]}"#,
        )
        .unwrap();
        let first = parsed.choices.into_iter().next().unwrap();
        assert_eq!(first.message.content, "Olá!");
    }

    #[test]
    fn test_response_without_choices_parses_to_empty() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"id": "gen-123", "object": "chat.completion"}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
