use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{QuizSession, ScoreReport},
    models::dto::request::{GenerateQuizRequest, RecordAnswerRequest},
    repositories::SessionRepository,
    services::extraction::extract_text,
    services::generation_service::GenerationService,
    services::scoring_service::ScoringService,
};

pub struct SessionService {
    repository: Arc<dyn SessionRepository>,
    generation: Arc<GenerationService>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository>, generation: Arc<GenerationService>) -> Self {
        Self {
            repository,
            generation,
        }
    }

    pub async fn create_session(&self) -> AppResult<QuizSession> {
        let session = QuizSession::new();
        log::info!("Created quiz session {}", session.id);
        self.repository.create(session).await
    }

    pub async fn get_session(&self, id: &str) -> AppResult<QuizSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    /// Generates a fresh quiz for the session. Parameters are checked and
    /// the source text extracted before the gateway is called; any failure
    /// up to and including payload decoding leaves the session untouched.
    pub async fn generate(
        &self,
        session_id: &str,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizSession> {
        let mut session = self.get_session(session_id).await?;

        request.validate()?;
        let text = extract_text(request.file_name.as_deref(), &request.content)?;

        let quiz = self.generation.generate_quiz(text, &request).await?;
        let question_count = quiz.len();

        session.install_quiz(quiz);
        let session = self.repository.update(session).await?;
        log::info!(
            "Session {} now holds a {}-question quiz on '{}'",
            session.id,
            question_count,
            request.subject
        );

        Ok(session)
    }

    /// Upserts one answer selection, or clears it when no option is given.
    pub async fn record_answer(
        &self,
        session_id: &str,
        request: RecordAnswerRequest,
    ) -> AppResult<QuizSession> {
        let mut session = self.get_session(session_id).await?;

        {
            let quiz = session.quiz.as_ref().ok_or_else(|| {
                AppError::InvalidState("no quiz to answer; generate one first".to_string())
            })?;
            if session.submitted {
                return Err(AppError::InvalidState(
                    "quiz already submitted; reset it to change answers".to_string(),
                ));
            }

            let question = quiz.question(&request.question_id).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Question '{}' is not part of this quiz",
                    request.question_id
                ))
            })?;
            if let Some(key) = &request.option {
                if !question.options.contains_key(key) {
                    return Err(AppError::ValidationError(format!(
                        "Option '{}' is not offered by question '{}'",
                        key, request.question_id
                    )));
                }
            }
        }

        match request.option {
            Some(key) => {
                session.answers.insert(request.question_id, key);
            }
            None => {
                session.answers.remove(&request.question_id);
            }
        }
        session.modified_at = Some(Utc::now());

        self.repository.update(session).await
    }

    /// Grades the current answers and marks the session submitted. Repeat
    /// submissions without intervening changes return the same report.
    pub async fn submit(&self, session_id: &str) -> AppResult<ScoreReport> {
        let mut session = self.get_session(session_id).await?;

        let report = {
            let quiz = session.quiz.as_ref().ok_or_else(|| {
                AppError::InvalidState("no quiz to submit; generate one first".to_string())
            })?;
            ScoringService::score(quiz, &session.answers)
        };

        session.submitted = true;
        session.modified_at = Some(Utc::now());
        self.repository.update(session).await?;

        log::info!(
            "Session {} submitted: {}/{} correct ({}%)",
            session_id,
            report.correct_count,
            report.total_count,
            report.percentage
        );

        Ok(report)
    }

    /// Clears answers and the submitted flag so the same quiz can be taken
    /// again. Resetting a session with no quiz is a no-op.
    pub async fn reset(&self, session_id: &str) -> AppResult<QuizSession> {
        let mut session = self.get_session(session_id).await?;

        if session.quiz.is_none() {
            return Ok(session);
        }

        session.reset();
        self.repository.update(session).await
    }
}
