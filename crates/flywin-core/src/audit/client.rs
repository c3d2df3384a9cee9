//! Claude Messages API client.
//!
//! Sends a single user-role text message and returns the text of the first
//! text block in the reply.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AuditConfig;
use crate::error::{FlywinError, FlywinResult};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// A text-completion backend that turns one prompt into one reply.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Send the prompt and return the raw reply text.
    async fn complete(&self, prompt: &str) -> FlywinResult<String>;

    /// Model identifier, for logging.
    fn model_name(&self) -> &str;
}

/// Client for calling the Claude Messages API.
pub struct ClaudeClient {
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}

impl ClaudeClient {
    /// Create a client from validated configuration.
    pub fn new(config: &AuditConfig) -> FlywinResult<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint: messages_endpoint(&config.api_url),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            client,
        })
    }
}

#[async_trait]
impl CompletionModel for ClaudeClient {
    async fn complete(&self, prompt: &str) -> FlywinResult<String> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Claude API");
        let api_response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = api_response.status();
        if !status.is_success() {
            let body = api_response.text().await.unwrap_or_default();
            return Err(FlywinError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = api_response.text().await?;
        let response: MessagesResponse = serde_json::from_str(&body)?;
        let text = first_text(response)?;

        debug!(reply_len = text.len(), "Claude API replied");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

fn messages_endpoint(api_url: &str) -> String {
    format!("{}/v1/messages", api_url.trim_end_matches('/'))
}

fn first_text(response: MessagesResponse) -> FlywinResult<String> {
    response
        .content
        .into_iter()
        .find(|c| c.content_type == "text")
        .and_then(|c| c.text)
        .ok_or(FlywinError::EmptyResponse)
}
