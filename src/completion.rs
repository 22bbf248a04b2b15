use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::metrics::UPSTREAM_FAILURES;
use crate::models::NameCandidate;
use crate::prompt::Prompt;

// Chat completions request format (OpenAI wire shape)
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// Chat completions response format
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatUsage {
    total_tokens: u32,
}

// Normalized upstream result. Empty text is a valid outcome, not an error.
#[derive(Debug, Clone)]
pub struct CompletionResult {
    pub text: String,
    pub tokens: u32,
}

// Single-shot client for the chat completions upstream. Exactly one
// outbound call per invocation, no retries; failure detail goes into the
// error for server-side logging only.
pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl CompletionClient {
    pub fn new(client: reqwest::Client, base_url: String, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    pub async fn complete(
        &self,
        prompt: &Prompt,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<CompletionResult, ApiError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                UPSTREAM_FAILURES.inc();
                ApiError::Upstream(format!("request failed: {e}"))
            })?;

        if !response.status().is_success() {
            UPSTREAM_FAILURES.inc();
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Upstream(format!(
                "upstream returned {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            UPSTREAM_FAILURES.inc();
            ApiError::Upstream(format!("undecodable upstream response: {e}"))
        })?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();
        let tokens = parsed.usage.map_or(0, |usage| usage.total_tokens);

        Ok(CompletionResult { text, tokens })
    }
}

// Strips common markdown fencing and parses the strict candidate array
// the naming prompt demands. Empty output parses to an empty list.
pub fn parse_candidates(text: &str) -> Result<Vec<NameCandidate>, ApiError> {
    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(cleaned)
        .map_err(|e| ApiError::UpstreamParse(format!("{e}; raw output: {text}")))
}
