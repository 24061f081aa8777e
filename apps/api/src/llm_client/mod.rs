//! LLM client: the single point of entry for all inference calls in the portfolio API.
//!
//! Talks to Groq's OpenAI-compatible chat completions endpoint. Exactly one
//! outbound request per call: no retries, no caching, no streaming.
//!
//! Model: llama-3.3-70b-versatile (hardcoded, like the sampling parameters)

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// The model used for every chat completion.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 300;
const TOP_P: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected credentials (status {status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Provider rate limit exceeded: {message}")]
    RateLimited { message: String },

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Stable label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Http(_) => "http",
            ProviderError::Unauthorized { .. } => "unauthorized",
            ProviderError::RateLimited { .. } => "rate_limited",
            ProviderError::Api { .. } => "api",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Anything that can turn a system prompt plus one user message into a reply.
///
/// Carried in `AppState` as `Arc<dyn ChatCompletion>` so handlers can be
/// exercised against a fake.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ProviderError>;
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [CompletionMessage<'a>; 2],
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct CompletionMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
}

impl CompletionResponse {
    /// Extracts the content of the first choice.
    fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// The HTTP-backed `ChatCompletion` used in production.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    completions_url: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.groq_api_key.clone(),
            completions_url: format!(
                "{}/chat/completions",
                config.groq_base_url.trim_end_matches('/')
            ),
        })
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, ProviderError> {
        let request_body = CompletionRequest {
            model: MODEL,
            messages: [
                CompletionMessage {
                    role: "system",
                    content: system_prompt,
                },
                CompletionMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            stream: false,
        };

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let completion: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, completion_tokens={:?}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        completion.into_text().ok_or_else(|| {
            ProviderError::MalformedResponse("first choice has no message content".to_string())
        })
    }
}

/// Maps a non-2xx provider reply to its error variant.
fn status_error(status: StatusCode, body: String) -> ProviderError {
    // Prefer the provider's own message over the raw body
    let message = serde_json::from_str::<ProviderErrorBody>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::Unauthorized {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited { message },
        _ => ProviderError::Api {
            status: status.as_u16(),
            message,
        },
    }
}
