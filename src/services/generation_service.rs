use std::sync::Arc;

use crate::{
    constants::mcq_prompt::response_template,
    errors::{AppError, AppResult},
    gateway::{GenerationRequest, QuizGateway},
    models::domain::Quiz,
    models::dto::request::GenerateQuizRequest,
};

pub struct GenerationService {
    gateway: Arc<dyn QuizGateway>,
}

impl GenerationService {
    pub fn new(gateway: Arc<dyn QuizGateway>) -> Self {
        Self { gateway }
    }

    /// Turns extracted source text plus the user's parameters into a
    /// validated quiz. The gateway payload is never trusted as-is.
    pub async fn generate_quiz(
        &self,
        text: String,
        request: &GenerateQuizRequest,
    ) -> AppResult<Quiz> {
        let response_json = serde_json::to_string(&response_template()).map_err(|e| {
            AppError::InternalError(format!("failed to encode response template: {}", e))
        })?;

        let generation_request = GenerationRequest {
            text,
            number: request.question_count,
            subject: request.subject.clone(),
            tone: request.tone.to_string(),
            response_json,
        };

        let payload = self.gateway.generate(generation_request).await?;
        log::info!(
            "Generation call used {} tokens ({} prompt, {} completion)",
            payload.usage.total_tokens,
            payload.usage.prompt_tokens,
            payload.usage.completion_tokens
        );

        let quiz = Quiz::from_payload(&payload.quiz)?;
        if quiz.len() != request.question_count as usize {
            log::warn!(
                "Generation returned {} questions where {} were requested",
                quiz.len(),
                request.question_count
            );
        }

        Ok(quiz)
    }
}
