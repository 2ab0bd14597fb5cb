use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chipscout_core::config::{LlmConfig, LlmProvider};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tokio::time::sleep;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

const OPENAI_DEFAULT_URL: &str = "https://api.openai.com";
const ANTHROPIC_DEFAULT_URL: &str = "https://api.anthropic.com";
const OLLAMA_DEFAULT_URL: &str = "http://localhost:11434";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;
const TEMPERATURE: f32 = 0.2;
const INITIAL_RETRY_DELAY_MS: u64 = 500;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("provider returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("provider reply had no completion text")]
    EmptyReply,
    #[error("missing api key for {0:?} provider")]
    MissingApiKey(LlmProvider),
}

impl CompletionError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => StatusCode::from_u16(*status)
                .map(is_retryable_status)
                .unwrap_or(false),
            Self::EmptyReply | Self::MissingApiKey(_) => false,
        }
    }
}

/// Rate limiting and server errors are worth another attempt; other
/// client errors are not.
pub fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Backoff before retry number `attempt` (1-based): 500ms, 1s, 2s, ...
pub fn retry_delay(attempt: u32) -> Duration {
    let factor = 1_u64 << attempt.saturating_sub(1).min(10);
    Duration::from_millis(INITIAL_RETRY_DELAY_MS.saturating_mul(factor))
}

/// Completion client for the configured provider.
pub struct HttpLlmClient {
    client: Client,
    provider: LlmProvider,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    max_retries: u32,
}

impl HttpLlmClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url(config.provider).to_string());

        Ok(Self {
            client,
            provider: config.provider,
            api_key: config.api_key.clone(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            max_retries: config.max_retries,
        })
    }

    pub fn provider(&self) -> LlmProvider {
        self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> String {
        match self.provider {
            LlmProvider::OpenAi => format!("{}/v1/chat/completions", self.base_url),
            LlmProvider::Anthropic => format!("{}/v1/messages", self.base_url),
            LlmProvider::Ollama => format!("{}/api/generate", self.base_url),
        }
    }

    fn request(&self, prompt: &str) -> Result<RequestBuilder, CompletionError> {
        let body = request_body(self.provider, &self.model, prompt);
        let builder = self.client.post(self.endpoint()).json(&body);

        match self.provider {
            LlmProvider::OpenAi => Ok(builder.bearer_auth(self.secret()?)),
            LlmProvider::Anthropic => Ok(builder
                .header("x-api-key", self.secret()?)
                .header("anthropic-version", ANTHROPIC_API_VERSION)),
            LlmProvider::Ollama => Ok(builder),
        }
    }

    fn secret(&self) -> Result<&str, CompletionError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret())
            .filter(|key| !key.trim().is_empty())
            .ok_or(CompletionError::MissingApiKey(self.provider))
    }

    async fn attempt(&self, prompt: &str) -> Result<String, CompletionError> {
        let response = self.request(prompt)?.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status: status.as_u16(), message });
        }

        let reply: Value = response.json().await?;
        extract_completion(self.provider, &reply).ok_or(CompletionError::EmptyReply)
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let mut attempt = 0;
        loop {
            match self.attempt(prompt).await {
                Ok(text) => return Ok(text),
                Err(error) if error.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = retry_delay(attempt);
                    tracing::warn!(
                        event_name = "ai.completion.retry",
                        provider = ?self.provider,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "completion request failed, retrying"
                    );
                    sleep(delay).await;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}

fn default_base_url(provider: LlmProvider) -> &'static str {
    match provider {
        LlmProvider::OpenAi => OPENAI_DEFAULT_URL,
        LlmProvider::Anthropic => ANTHROPIC_DEFAULT_URL,
        LlmProvider::Ollama => OLLAMA_DEFAULT_URL,
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

fn request_body(provider: LlmProvider, model: &str, prompt: &str) -> Value {
    let messages = [ChatMessage { role: "user", content: prompt }];
    match provider {
        LlmProvider::OpenAi => json!({
            "model": model,
            "messages": messages,
            "temperature": TEMPERATURE,
        }),
        LlmProvider::Anthropic => json!({
            "model": model,
            "max_tokens": MAX_TOKENS,
            "messages": messages,
        }),
        LlmProvider::Ollama => json!({
            "model": model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": TEMPERATURE, "num_predict": MAX_TOKENS },
        }),
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiReply {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AnthropicReply {
    content: Vec<AnthropicBlock>,
}

#[derive(Debug, Deserialize)]
struct AnthropicBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaReply {
    response: String,
}

fn extract_completion(provider: LlmProvider, reply: &Value) -> Option<String> {
    let text = match provider {
        LlmProvider::OpenAi => serde_json::from_value::<OpenAiReply>(reply.clone())
            .ok()?
            .choices
            .into_iter()
            .next()?
            .message
            .content?,
        LlmProvider::Anthropic => serde_json::from_value::<AnthropicReply>(reply.clone())
            .ok()?
            .content
            .into_iter()
            .filter_map(|block| block.text)
            .collect::<Vec<_>>()
            .join(""),
        LlmProvider::Ollama => serde_json::from_value::<OllamaReply>(reply.clone()).ok()?.response,
    };

    (!text.trim().is_empty()).then_some(text)
}
