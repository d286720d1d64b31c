//! Chat completion API client

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai::prompts::SYSTEM_INSTRUCTION;
use crate::core::config::Config;
use crate::error::{PrDraftError, Result};

/// OpenAI-compatible chat completion client
pub struct CompletionClient {
    client: Client,
    api_key: SecretString,
    api_base: String,
    model: String,
    temperature: f32,
}

impl CompletionClient {
    /// Create a client from configuration and an API key
    pub fn new(config: &Config, api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    /// Get the current model name
    pub fn model_name(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    /// Request a PR description for a rendered prompt
    pub async fn generate_pr_description(&self, prompt: &str) -> Result<String> {
        let request_body = build_request(&self.model, self.temperature, prompt);
        debug!(model = %self.model, prompt_bytes = prompt.len(), "sending completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PrDraftError::CompletionApi(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| PrDraftError::CompletionApi(format!("Failed to parse response: {}", e)))?;

        first_choice_text(chat_response).map(|text| clean_response(&text))
    }
}

fn build_request<'a>(model: &'a str, temperature: f32, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            RequestMessage {
                role: "system",
                content: SYSTEM_INSTRUCTION,
            },
            RequestMessage {
                role: "user",
                content: prompt,
            },
        ],
        temperature,
    }
}

fn first_choice_text(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| PrDraftError::CompletionApi("Empty response from API".to_string()))
}

/// Trim the model output and drop a surrounding code fence, if any
pub fn clean_response(response: &str) -> String {
    let mut body = response.trim();

    // Only a fence wrapping the whole body is removed
    if let Some(rest) = body.strip_prefix("```") {
        // The opening fence line may carry a language tag
        body = match rest.find('\n') {
            Some(newline) => &rest[newline + 1..],
            None => rest,
        };
        if let Some(rest) = body.strip_suffix("```") {
            body = rest;
        }
    }

    body.trim().to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat completion request/response types
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
