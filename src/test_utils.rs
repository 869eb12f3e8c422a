use crate::models::domain::{Quiz, QuizSession};
use crate::models::dto::request::{GenerateQuizRequest, QuizTone};

/// Two-question quiz payload in the gateway wire shape.
pub fn sample_quiz_payload() -> String {
    r#"{
        "1": {
            "mcq": "What is the powerhouse of the cell?",
            "options": {
                "a": "Nucleus",
                "b": "Mitochondria",
                "c": "Ribosome",
                "d": "Golgi apparatus"
            },
            "correct": "b"
        },
        "2": {
            "mcq": "Which molecule carries genetic information?",
            "options": {
                "a": "DNA",
                "b": "RNA",
                "c": "Protein",
                "d": "Lipid"
            },
            "correct": "a"
        }
    }"#
    .to_string()
}

pub fn sample_quiz() -> Quiz {
    Quiz::from_payload(&sample_quiz_payload()).expect("sample payload should decode")
}

pub fn sample_session() -> QuizSession {
    QuizSession::new()
}

pub fn sample_generate_request() -> GenerateQuizRequest {
    GenerateQuizRequest {
        file_name: Some("biology.txt".to_string()),
        content: "The cell is the basic structural unit of all known organisms.".to_string(),
        question_count: 2,
        subject: "Biology".to_string(),
        tone: QuizTone::Simple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_quiz_matches_its_payload() {
        let quiz = sample_quiz();
        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz.question("1").unwrap().correct, "b");
        assert_eq!(quiz.question("2").unwrap().correct, "a");
    }

    #[test]
    fn sample_generate_request_is_valid() {
        use validator::Validate;
        assert!(sample_generate_request().validate().is_ok());
    }
}
