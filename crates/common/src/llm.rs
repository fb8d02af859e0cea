//! Completion client for OpenAI-compatible chat APIs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::ChatbotError;

/// Seam between request handlers and the completion API.
///
/// Handlers only depend on this trait, so tests can substitute a stub
/// without touching the network.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Send role-tagged messages to the completion API and return the first
    /// candidate's text, trimmed of surrounding whitespace.
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ChatbotError>;
}

/// Completion client for OpenAI-compatible APIs
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat completion request
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat completion response
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

/// Response choice
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// Response message; content may be absent in malformed upstream replies
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl LlmClient {
    /// Create a new completion client.
    ///
    /// The underlying HTTP client is built once here and reused for every
    /// request; no other per-request state exists.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model,
            base_url,
        }
    }

    /// Send a chat completion request, single attempt, no retry
    async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse, ChatbotError> {
        debug!(
            "Sending completion request with {} messages",
            request.messages.len()
        );

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatbotError::Upstream(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Completion API error {}: {}", status, body);
            return Err(ChatbotError::Upstream(format!(
                "completion API error: {} - {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ChatbotError::Upstream(format!("Failed to read response: {}", e)))?;

        debug!("Completion raw response: {}", response_text);

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            ChatbotError::Upstream(format!("Failed to parse completion response: {}", e))
        })?;

        Ok(chat_response)
    }
}

#[async_trait]
impl Completion for LlmClient {
    async fn complete(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<String, ChatbotError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages,
            temperature,
            max_tokens,
        };

        let response = self.chat_completion(request).await?;

        if let Some(choice) = response.choices.first() {
            if let Some(content) = &choice.message.content {
                return Ok(content.trim().to_string());
            }
        }

        Err(ChatbotError::Upstream(
            "completion API returned no candidates".to_string(),
        ))
    }
}
