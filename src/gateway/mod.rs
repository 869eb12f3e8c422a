pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

pub use openai::OpenAiQuizGateway;

/// Wire-format request for the question generation service. `response_json`
/// carries the JSON-encoded example the model is told to mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub text: String,
    pub number: i16,
    pub subject: String,
    pub tone: String,
    pub response_json: String,
}

/// Raw generation result: the quiz payload string (still to be decoded and
/// validated) plus the token spend for the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPayload {
    pub quiz: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGateway: Send + Sync {
    async fn generate(&self, request: GenerationRequest) -> AppResult<GenerationPayload>;
}
