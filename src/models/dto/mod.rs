pub mod request;
pub mod response;

pub use request::{GenerateQuizRequest, QuizTone, RecordAnswerRequest};
pub use response::{OptionViewDto, QuestionViewDto, QuizViewDto, SessionDto};
