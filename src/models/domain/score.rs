use serde::{Deserialize, Serialize};

/// Grading outcome for one submission, with per-question detail in quiz
/// display order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total_count: usize,
    /// Percentage of correct answers, rounded to one decimal place.
    pub percentage: f64,
    pub results: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}
