//! Filename suggestions from a chat-completion service.
//!
//! Sends the note to an OpenAI-compatible `/chat/completions` endpoint and
//! asks for a filename to store it under.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::traits::{Headers, HttpClient, HttpError};

/// Text placed before the note in the request
pub const PROMPT_PREFIX: &str = "I want to store some text inside a .txt file so suggest me a suitable filename. This is the text I want to store: \n";

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("suggestion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not decode response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("suggestion service returned no choices")]
    NoChoices,

    #[error("suggested filename is empty")]
    EmptyFilename,

    #[error("suggested filename {0:?} is not a plain file name")]
    InvalidFilename(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Single user message asking for a filename for `note`.
    pub fn for_note(model: impl Into<String>, note: &str) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: format!("{}{}", PROMPT_PREFIX, note),
            }],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Asks the completion service for a filename.
#[derive(Debug, Clone)]
pub struct FilenameSuggester<C> {
    client: C,
    url: String,
    api_key: String,
    model: String,
}

impl<C: HttpClient> FilenameSuggester<C> {
    pub fn new(
        client: C,
        url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a suggester for the endpoint and model in `config`.
    pub fn from_config(client: C, config: &AppConfig) -> Self {
        Self::new(
            client,
            config.completions_url(),
            config.api_key.clone(),
            config.model.clone(),
        )
    }

    /// Ask for a filename for `note` and return it cleaned up.
    pub async fn suggest(&self, note: &str) -> Result<String, SuggestError> {
        let request = ChatCompletionRequest::for_note(&self.model, note);
        let body = serde_json::to_string(&request).map_err(SuggestError::Encode)?;

        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        );

        tracing::info!(url = %self.url, model = %self.model, "Requesting filename suggestion");

        let response = self
            .client
            .post_json(&self.url, &body, &headers)
            .await
            .map_err(|source| SuggestError::Transport {
                url: self.url.clone(),
                source,
            })?;

        if !response.is_success() {
            tracing::error!(status = response.status, "Suggestion request rejected");
            return Err(SuggestError::Status {
                status: response.status,
                body: response.text_lossy(),
            });
        }

        let parsed: ChatCompletionResponse = response.json().map_err(SuggestError::Decode)?;
        let raw = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(SuggestError::NoChoices)?;

        let filename = sanitize_filename(&raw)?;
        tracing::info!(%filename, "Filename suggested");
        Ok(filename)
    }
}

/// Clean up a suggested filename.
///
/// Strips whitespace and any quotes or backticks wrapped around the name.
/// Rejects names that end up empty, that are `.` or `..`, or that contain a
/// path separator.
pub fn sanitize_filename(raw: &str) -> Result<String, SuggestError> {
    let name = raw
        .trim()
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '`') || c.is_whitespace());

    if name.is_empty() {
        return Err(SuggestError::EmptyFilename);
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(SuggestError::InvalidFilename(name.to_string()));
    }
    Ok(name.to_string())
}
