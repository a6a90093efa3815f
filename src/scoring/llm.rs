//! Chat backend abstraction and the Groq implementation.
//!
//! `complete` runs one system + user exchange and returns the raw model
//! text. Calls are blocking; the API layer moves them off the async
//! runtime with `spawn_blocking`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ScoringError;
use crate::config;

/// One round of chat completion against whatever model backs scoring.
pub trait ChatBackend: Send + Sync {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, ScoringError>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Client for the Groq OpenAI-compatible chat endpoint.
pub struct GroqClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GroqClient {
    pub fn new(base_url: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: config::GROQ_MODEL.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Builds a client from the environment, or `None` when no usable
    /// key is set. The service still starts without one and rejects
    /// scoring requests instead.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(config::GROQ_API_KEY_ENV).ok()?;
        if key.trim().is_empty() {
            return None;
        }
        Some(Self::new(
            config::GROQ_API_BASE,
            &key,
            config::REQUEST_TIMEOUT_SECS,
        ))
    }
}

impl ChatBackend for GroqClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, ScoringError> {
        let url = format!("{}/openai/v1/chat/completions", self.base_url);
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: config::GROQ_TEMPERATURE,
            max_tokens: config::GROQ_MAX_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ScoringError::BackendConnection(self.base_url.clone())
                } else if e.is_timeout() {
                    ScoringError::BackendTimeout(self.timeout_secs)
                } else {
                    ScoringError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringError::BackendStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let completion: ChatCompletion = response
            .json()
            .map_err(|e| ScoringError::CompletionDecode(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ScoringError::EmptyCompletion)?;

        Ok(choice.message.content.trim().to_string())
    }
}

/// Mock backend for tests: a canned completion or a fixed failure.
pub struct MockChat {
    response: Result<String, String>,
}

impl MockChat {
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            response: Err(error.to_string()),
        }
    }
}

impl ChatBackend for MockChat {
    fn complete(&self, _system: &str, _prompt: &str) -> Result<String, ScoringError> {
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(error) => Err(ScoringError::HttpClient(error.clone())),
        }
    }
}
