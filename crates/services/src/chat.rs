use std::env;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use studyhub_core::model::{ApiSettings, ApiSettingsDraft};

use crate::error::ChatError;

/// Whole-request deadline for one relay call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Upper bound on the error-body snippet carried in `ChatError::Remote`.
const ERROR_SNIPPET_CHARS: usize = 300;

/// One entry of the conversation sent to the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Thin client for an OpenAI-style `/chat/completions` endpoint.
///
/// One request, one response: no retries, no streaming, no conversation
/// state beyond the caller-supplied message list.
#[derive(Clone, Debug)]
pub struct ChatRelay {
    client: Client,
    settings: ApiSettings,
}

impl ChatRelay {
    #[must_use]
    pub fn new(settings: ApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    /// Build a relay from `STUDYHUB_AI_API_KEY`, `STUDYHUB_AI_BASE_URL` and
    /// `STUDYHUB_AI_MODEL`. Unset or blank variables fall back to defaults,
    /// and a malformed base URL falls back to the default endpoint.
    #[must_use]
    pub fn from_env() -> Self {
        let draft = ApiSettingsDraft {
            api_key: env::var("STUDYHUB_AI_API_KEY").ok(),
            base_url: env::var("STUDYHUB_AI_BASE_URL").ok(),
            model: env::var("STUDYHUB_AI_MODEL").ok(),
        };
        Self::new(draft.validate().unwrap_or_default())
    }

    /// True when an API key is configured and live answers are possible.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.settings.api_key().is_some()
    }

    #[must_use]
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    /// Relay one message list and return the assistant's reply text.
    ///
    /// A 200 response with an unexpected shape degrades to an empty string;
    /// callers must treat `Ok("")` as "no usable content", distinct from an
    /// error.
    ///
    /// # Errors
    ///
    /// `ChatError::MissingApiKey` when no key is configured (no request is
    /// made), `ChatError::Remote` for a non-2xx response, and
    /// `ChatError::Transport` for network or decode failures.
    pub async fn ask(&self, messages: &[ChatMessage]) -> Result<String, ChatError> {
        let Some(api_key) = self.settings.api_key() else {
            return Err(ChatError::MissingApiKey);
        };

        let url = format!(
            "{}/chat/completions",
            self.settings.base_url().trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: self.settings.model(),
            messages,
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .inspect_err(|err| tracing::warn!("chat request failed: {err}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_SNIPPET_CHARS).collect();
            tracing::warn!(%status, "chat endpoint rejected the request");
            return Err(ChatError::Remote {
                status,
                body: snippet,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .inspect_err(|err| tracing::warn!("chat response was not valid JSON: {err}"))?;

        // Missing fields default at every level, so a shape mismatch yields
        // an empty answer instead of an error.
        let answer = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(answer)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: ChatChoiceMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}
