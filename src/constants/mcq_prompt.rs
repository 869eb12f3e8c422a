use serde_json::{json, Value};

pub const MCQ_SYSTEM_PROMPT: &str = "You are an expert MCQ maker. Given a source text, it is your job to create a quiz of multiple choice questions for the requested subject, matching the requested tone, with the exact number of questions asked for. Make sure the questions are not repeated and every question checks against the text. Format your response like the response_json example in the request, using it as a guide: a JSON object keyed by question number, where each entry has an 'mcq' string, an 'options' object mapping option keys to choices, and a 'correct' field naming the correct option key. Return only the JSON object, with no surrounding prose.";

/// Single-example shape sent with every generation request so the model
/// mirrors it when laying out its answer.
pub fn response_template() -> Value {
    json!({
        "1": {
            "mcq": "multiple choice question",
            "options": {
                "a": "choice here",
                "b": "choice here",
                "c": "choice here",
                "d": "choice here",
            },
            "correct": "correct answer",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_template_has_expected_shape() {
        let template = response_template();

        let example = &template["1"];
        assert!(example["mcq"].is_string());
        assert_eq!(example["options"].as_object().unwrap().len(), 4);
        assert!(example["correct"].is_string());
    }

    #[test]
    fn response_template_is_embeddable_as_string() {
        let encoded = serde_json::to_string(&response_template()).unwrap();
        let decoded: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, response_template());
    }
}
