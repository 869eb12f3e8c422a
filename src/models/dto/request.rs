use serde::{Deserialize, Serialize};
use validator::Validate;

/// Parameters for generating a quiz from an uploaded source file.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    /// Name of the uploaded file, used to decide how to read the content.
    pub file_name: Option<String>,

    /// Raw file content as sent by the frontend.
    #[serde(default)]
    pub content: String,

    #[validate(range(min = 1, max = 100, message = "question count must be between 1 and 100"))]
    pub question_count: i16,

    #[validate(length(min = 1, max = 100))]
    pub subject: String,

    pub tone: QuizTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum QuizTone {
    Simple,
    Formal,
    Casual,
}

impl std::fmt::Display for QuizTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizTone::Simple => write!(f, "Simple"),
            QuizTone::Formal => write!(f, "Formal"),
            QuizTone::Casual => write!(f, "Casual"),
        }
    }
}

/// Records, replaces, or clears one answer selection.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordAnswerRequest {
    pub question_id: String,
    /// Option key to select; `null` clears any existing selection.
    pub option: Option<String>,
}
