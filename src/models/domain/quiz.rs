use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// A generated quiz: question id -> question, in the order the
/// generation gateway produced them.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: IndexMap<String, Question>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub mcq: String,
    pub options: IndexMap<String, String>,
    pub correct: String,
}

impl Quiz {
    /// Decodes the gateway's quiz payload string and checks its structural
    /// invariants. Any violation is reported as `MalformedResponse`.
    pub fn from_payload(payload: &str) -> AppResult<Self> {
        let quiz: Quiz = serde_json::from_str(payload)
            .map_err(|e| AppError::MalformedResponse(format!("invalid quiz JSON: {}", e)))?;
        quiz.validate()?;
        Ok(quiz)
    }

    fn validate(&self) -> AppResult<()> {
        if self.questions.is_empty() {
            return Err(AppError::MalformedResponse(
                "quiz contains no questions".to_string(),
            ));
        }
        for (id, question) in &self.questions {
            if question.options.is_empty() {
                return Err(AppError::MalformedResponse(format!(
                    "question '{}' has no options",
                    id
                )));
            }
            if !question.options.contains_key(&question.correct) {
                return Err(AppError::MalformedResponse(format!(
                    "question '{}' marks '{}' correct but offers no such option",
                    id, question.correct
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    /// Questions in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Question)> {
        self.questions.iter()
    }
}
