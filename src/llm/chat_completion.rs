//! Client for `OpenAI`-compatible chat completion endpoints.
//!
//! Sends an ordered list of role-tagged messages to `POST {base}/chat/completions`
//! with bearer authentication and returns the first choice's text.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{BartenderError, BartenderResult};

/// Sampling temperature for bartender answers.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Output token budget for bartender answers.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Role of a chat message.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Persona and behaviour instructions.
    System,
    /// End-user input.
    User,
    /// Model (or injected) assistant output.
    Assistant,
}

impl ChatRole {
    /// Stable string form used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single role-tagged chat message.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ChatMessage {
    /// Message role.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a message with the given role.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Anything that can turn a message list into a completion.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Submit the messages and return the trimmed text of the first choice.
    async fn complete(&self, messages: &[ChatMessage]) -> BartenderResult<String>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Async client for an `OpenAI`-compatible chat completion API.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiChatClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> BartenderResult<Self> {
        let endpoint = Url::parse(&format!(
            "{}/chat/completions",
            base_url.trim_end_matches('/')
        ))?;
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }
}

#[async_trait]
impl ChatCompleter for OpenAiChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> BartenderResult<String> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, model = %self.model, "Chat API returned an error status");
            return Err(BartenderError::ChatApiStatus(status.as_u16()));
        }

        let body: CompletionResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(BartenderError::EmptyCompletion)
    }
}
