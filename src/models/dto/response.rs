use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::session::{QuizSession, SessionStatus};

/// Outward view of a session. Correct answer keys are deliberately absent;
/// they are only revealed through the score report after submission.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionDto {
    pub id: String,
    pub status: SessionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizViewDto>,
    pub answered_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizViewDto {
    pub questions: Vec<QuestionViewDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionViewDto {
    pub id: String,
    pub mcq: String,
    pub options: Vec<OptionViewDto>,
    /// The option key this session currently has selected, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptionViewDto {
    pub key: String,
    pub text: String,
}

impl From<&QuizSession> for SessionDto {
    fn from(session: &QuizSession) -> Self {
        let quiz = session.quiz.as_ref().map(|quiz| QuizViewDto {
            questions: quiz
                .iter()
                .map(|(id, question)| QuestionViewDto {
                    id: id.clone(),
                    mcq: question.mcq.clone(),
                    options: question
                        .options
                        .iter()
                        .map(|(key, text)| OptionViewDto {
                            key: key.clone(),
                            text: text.clone(),
                        })
                        .collect(),
                    selected: session.answers.get(id).cloned(),
                })
                .collect(),
        });

        SessionDto {
            id: session.id.clone(),
            status: session.status(),
            quiz,
            answered_count: session.answers.len(),
            created_at: session.created_at,
        }
    }
}
