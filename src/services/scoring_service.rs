use std::collections::HashMap;

use crate::models::domain::{QuestionResult, Quiz, ScoreReport};

pub struct ScoringService;

impl ScoringService {
    /// Grade an answer set against a quiz. Questions are walked in quiz
    /// order; a missing answer matches nothing and scores as incorrect.
    pub fn score(quiz: &Quiz, answers: &HashMap<String, String>) -> ScoreReport {
        let mut correct_count = 0;
        let mut results = Vec::with_capacity(quiz.len());

        for (id, question) in quiz.iter() {
            let user_answer = answers.get(id).cloned();
            let is_correct = user_answer.as_deref() == Some(question.correct.as_str());
            if is_correct {
                correct_count += 1;
            }

            results.push(QuestionResult {
                question_id: id.clone(),
                user_answer,
                correct_answer: question.correct.clone(),
                is_correct,
            });
        }

        let total_count = quiz.len();
        let percentage = if total_count == 0 {
            0.0
        } else {
            let raw = (correct_count as f64 / total_count as f64) * 100.0;
            (raw * 10.0).round() / 10.0
        };

        ScoreReport {
            correct_count,
            total_count,
            percentage,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Quiz;
    use crate::test_utils::sample_quiz;

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(id, key)| (id.to_string(), key.to_string()))
            .collect()
    }

    #[test]
    fn all_correct_scores_one_hundred() {
        let quiz = sample_quiz();

        let report = ScoringService::score(&quiz, &answers(&[("1", "b"), ("2", "a")]));

        assert_eq!(report.correct_count, 2);
        assert_eq!(report.total_count, 2);
        assert_eq!(report.percentage, 100.0);
        assert!(report.results.iter().all(|r| r.is_correct));
    }

    #[test]
    fn all_wrong_scores_zero() {
        let quiz = sample_quiz();

        let report = ScoringService::score(&quiz, &answers(&[("1", "a"), ("2", "b")]));

        assert_eq!(report.correct_count, 0);
        assert_eq!(report.percentage, 0.0);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let quiz = sample_quiz();

        let report = ScoringService::score(&quiz, &answers(&[("1", "b")]));

        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total_count, 2);
        let second = &report.results[1];
        assert_eq!(second.question_id, "2");
        assert!(second.user_answer.is_none());
        assert!(!second.is_correct);
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        let quiz = Quiz::from_payload(
            r#"{
                "1": {"mcq": "Q1?", "options": {"a": "A", "b": "B"}, "correct": "a"},
                "2": {"mcq": "Q2?", "options": {"a": "A", "b": "B"}, "correct": "a"},
                "3": {"mcq": "Q3?", "options": {"a": "A", "b": "B"}, "correct": "a"}
            }"#,
        )
        .unwrap();

        let one_third = ScoringService::score(&quiz, &answers(&[("1", "a")]));
        assert_eq!(one_third.percentage, 33.3);

        let two_thirds = ScoringService::score(&quiz, &answers(&[("1", "a"), ("2", "a")]));
        assert_eq!(two_thirds.percentage, 66.7);
    }

    #[test]
    fn results_follow_quiz_display_order() {
        let quiz = sample_quiz();

        let report = ScoringService::score(&quiz, &answers(&[("2", "a"), ("1", "b")]));

        let ids: Vec<&str> = report.results.iter().map(|r| r.question_id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(report.results[0].correct_answer, "b");
    }
}
