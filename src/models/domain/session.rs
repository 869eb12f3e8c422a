use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz::Quiz;

/// One user's quiz lifecycle: the generated quiz (if any), their current
/// answer selections, and whether the quiz has been submitted for grading.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSession {
    pub id: String,
    pub quiz: Option<Quiz>,
    pub answers: HashMap<String, String>,
    pub submitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Empty,
    Ready,
    Submitted,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Empty => write!(f, "empty"),
            SessionStatus::Ready => write!(f, "ready"),
            SessionStatus::Submitted => write!(f, "submitted"),
        }
    }
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            id: Uuid::new_v4().to_string(),
            quiz: None,
            answers: HashMap::new(),
            submitted: false,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }

    /// Status is derived from the core fields, never stored separately.
    pub fn status(&self) -> SessionStatus {
        match (&self.quiz, self.submitted) {
            (None, _) => SessionStatus::Empty,
            (Some(_), false) => SessionStatus::Ready,
            (Some(_), true) => SessionStatus::Submitted,
        }
    }

    /// Replaces any prior quiz and starts the answer cycle over.
    pub fn install_quiz(&mut self, quiz: Quiz) {
        self.quiz = Some(quiz);
        self.answers.clear();
        self.submitted = false;
        self.modified_at = Some(Utc::now());
    }

    /// Clears answers and the submitted flag while keeping the quiz, so the
    /// same questions can be taken again.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.submitted = false;
        self.modified_at = Some(Utc::now());
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
