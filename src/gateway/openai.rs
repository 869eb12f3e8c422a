use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::Config;
use crate::constants::mcq_prompt::MCQ_SYSTEM_PROMPT;
use crate::errors::{AppError, AppResult};
use crate::gateway::{GenerationPayload, GenerationRequest, QuizGateway, TokenUsage};

/// Quiz generation over the OpenAI chat completions API. The request is sent
/// as the user message, JSON-encoded, and the completion is constrained to a
/// JSON object so the quiz payload can be decoded directly.
pub struct OpenAiQuizGateway {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: TokenUsage,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiQuizGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.gateway_timeout_secs),
        }
    }

    fn extract_payload(completion: ChatCompletionResponse) -> AppResult<GenerationPayload> {
        let usage = completion.usage;
        let quiz = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                AppError::GenerationError("completion carried no quiz payload".to_string())
            })?;

        Ok(GenerationPayload { quiz, usage })
    }
}

#[async_trait]
impl QuizGateway for OpenAiQuizGateway {
    async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationPayload> {
        let user_content = serde_json::to_string(&request).map_err(|e| {
            AppError::InternalError(format!("failed to encode generation request: {}", e))
        })?;

        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": MCQ_SYSTEM_PROMPT},
                {"role": "user", "content": user_content},
            ],
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                log::error!("Generation request failed to reach the API: {}", e);
                AppError::GenerationError(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read response body".to_string());
            log::error!("Generation API returned {}: {}", status, body);
            return Err(AppError::GenerationError(format!(
                "generation API returned {}",
                status
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            log::error!("Generation API response could not be parsed: {}", e);
            AppError::GenerationError(format!("unreadable completion response: {}", e))
        })?;

        Self::extract_payload(completion)
    }
}
