use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::ChatClient;
use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai";
const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";
const DEFAULT_MODEL: &str = "llama3-8b-8192";
/// Low temperature favors consistent structured output over creativity.
const TEMPERATURE: f32 = 0.2;
const MAX_TOKENS: u32 = 400;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// OpenAI-compatible chat-completions request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat<'a>,
}

#[derive(serde::Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(serde::Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
}

/// Minimal subset of the chat-completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// HTTP client for the Groq chat-completions API (and OpenAI-compatible
/// endpoints).
///
/// Implements [`ChatClient`] so higher-level components (e.g.
/// [`crate::application::ExtractTermsUseCase`]) stay decoupled from transport
/// and serialization details.
///
/// Every request is sent with `response_format: {"type": "json_object"}` so
/// the model is constrained to a single JSON object.
///
/// **API key**: read from the `GROQ_API_KEY` environment variable at
/// construction time; [`GroqClient::from_env`] returns `None` when it is
/// absent. Override the endpoint or model via:
///
/// ```text
/// GROQ_BASE_URL=https://api.groq.com/openai
/// GROQ_MODEL=llama3-8b-8192
/// ```
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    /// Full endpoint URL (base + CHAT_COMPLETIONS_PATH).
    url: String,
}

impl GroqClient {
    /// Create a new client with an explicit API key, model, and endpoint URL.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    /// Convenience constructor that reads configuration from the environment:
    /// - `GROQ_API_KEY`  — required; returns `None` when absent
    /// - `GROQ_BASE_URL` — optional; defaults to `https://api.groq.com/openai`
    /// - `GROQ_MODEL`    — optional; defaults to `llama3-8b-8192`
    pub fn from_env() -> Option<Self> {
        let key = std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty())?;
        let base =
            std::env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Some(Self::new(key, model, base))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system,
                },
                ApiMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::completion(format!("GroqClient: request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GroqClient: API returned {status}: {body}");
            return Err(DomainError::completion(format!(
                "GroqClient: API returned {status}"
            )));
        }

        let api_response: ApiResponse = response.json().await.map_err(|e| {
            DomainError::completion(format!("GroqClient: failed to parse response: {e}"))
        })?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| DomainError::completion("GroqClient: response contained no choices"))
    }
}
